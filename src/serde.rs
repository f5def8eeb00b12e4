// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support.
//!
//! - [`FixedArray<T, N>`](crate::FixedArray): a sequence of exactly `N`
//!   elements. Shorter or longer sequences are rejected.
//! - [`FixedStr<N>`](crate::FixedStr): a string (its payload). A payload that
//!   is not UTF-8 is written as bytes. An unterminated buffer does not
//!   serialize. Deserializing rejects text longer than `N - 1` bytes and text
//!   containing a `0` byte, so every accepted value reads back unchanged.
//! - [`CoreType`](crate::CoreType): its `u8` tag.
//!
//! `Char`, `Timestamp` and `Variant` derive their impls next to their
//! definitions.
//!
//! ### Trait bounds
//!
//! `FixedArray<T, N>: Deserialize` needs `T: Default` to seed the buffer
//! before elements are written into it.

// Crate imports
use crate::{array::FixedArray, kind::CoreType, text::FixedStr};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Copy + Serialize, const N: usize> Serialize for FixedArray<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(N))?;
        for item in self.as_slice() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for ArrayVisitor<T, N>
where
    T: Deserialize<'de> + Copy + Default,
{
    type Value = FixedArray<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of exactly {N} elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedArray::<T, N>::default();
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = a
                .next_element::<T>()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if a.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format_args!(
                "too many elements (capacity {N})"
            )));
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedArray<T, N>
where
    T: Deserialize<'de> + Copy + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T, N>(PhantomData))
    }
}

impl<const N: usize> Serialize for FixedStr<N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if self.as_bytes_with_nul().is_none() {
            return Err(ser::Error::custom(format_args!(
                "text is not terminated within capacity {N}"
            )));
        }
        match self.to_str() {
            Some(text) => s.serialize_str(text),
            None => s.serialize_bytes(self.as_bytes()),
        }
    }
}

struct TextVisitor<const N: usize>;

impl<const N: usize> TextVisitor<N> {
    fn build<E: de::Error>(&self, src: &[u8]) -> Result<FixedStr<N>, E> {
        if let Some(at) = src.iter().position(|&b| b == 0) {
            return Err(E::custom(format_args!("text has a NUL byte at {at}")));
        }
        let mut out = FixedStr::new();
        out.try_set_bytes(src).map_err(|_| {
            E::custom(format_args!(
                "text of length {} exceeds capacity {}",
                src.len(),
                N.saturating_sub(1)
            ))
        })?;
        Ok(out)
    }
}

impl<'de, const N: usize> de::Visitor<'de> for TextVisitor<N> {
    type Value = FixedStr<N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string of at most {} bytes", N.saturating_sub(1))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        self.build(v.as_bytes())
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        self.build(v)
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedStr<N> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_str(TextVisitor::<N>)
    }
}

impl Serialize for CoreType {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(u8::from(*self))
    }
}

impl<'de> Deserialize<'de> for CoreType {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let tag = u8::deserialize(d)?;
        CoreType::try_from(tag).map_err(de::Error::custom)
    }
}
