// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Variant` tagged value.
//!
//! A [`Variant`] holds at most one primitive value together with its kind.
//! Reads are tag-checked: asking for a kind the variant does not hold
//! returns [`Error::TypeMismatch`] instead of reinterpreting the bytes.
//!
//! # Wire record
//!
//! On the wire a variant is [`Variant::WIRE_SIZE`] (16) bytes:
//!
//! | bytes | content |
//! |-------|---------|
//! | 0     | kind tag ([`CoreType`] as `u8`) |
//! | 1..8  | zero |
//! | 8..16 | value, little-endian, in the low bytes; unused bytes zero |
//!
//! A timestamp stores `sec` in bytes 8..12 and `nsec` in bytes 12..16.

// Crate imports
use crate::{
    error::Error,
    kind::{Char, CoreType, Primitive, Timestamp},
};

/// A tagged union of every primitive kind.
///
/// The discriminant is the kind tag; [`Variant::Void`] is the empty state.
/// A variant never holds another variant.
///
/// # Examples
///
/// ```rust
/// use fixed_core::{CoreType, Error, Variant};
///
/// let mut v = Variant::from(-3_i16);
/// assert_eq!(v.kind(), CoreType::Int16);
/// assert_eq!(v.get::<i16>(), Ok(-3));
/// assert_eq!(
///     v.get::<u16>(),
///     Err(Error::TypeMismatch { expected: CoreType::Uint16, found: CoreType::Int16 })
/// );
///
/// v.set(2.5_f32);
/// assert_eq!(v.kind(), CoreType::Float32);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// No value.
    #[default]
    Void,
    /// [`CoreType::Char`].
    Char(Char),
    /// [`CoreType::Int8`].
    Int8(i8),
    /// [`CoreType::Uint8`].
    Uint8(u8),
    /// [`CoreType::Int16`].
    Int16(i16),
    /// [`CoreType::Uint16`].
    Uint16(u16),
    /// [`CoreType::Int32`].
    Int32(i32),
    /// [`CoreType::Uint32`].
    Uint32(u32),
    /// [`CoreType::Int64`].
    Int64(i64),
    /// [`CoreType::Uint64`].
    Uint64(u64),
    /// [`CoreType::Float32`].
    Float32(f32),
    /// [`CoreType::Float64`].
    Float64(f64),
    /// [`CoreType::Timestamp`].
    Timestamp(Timestamp),
}

impl Variant {
    /// Byte size of the wire record.
    pub const WIRE_SIZE: usize = 16;

    const VALUE_OFFSET: usize = 8;

    /// Kind of the held value.
    #[inline]
    pub const fn kind(&self) -> CoreType {
        match self {
            Variant::Void => CoreType::Void,
            Variant::Char(_) => CoreType::Char,
            Variant::Int8(_) => CoreType::Int8,
            Variant::Uint8(_) => CoreType::Uint8,
            Variant::Int16(_) => CoreType::Int16,
            Variant::Uint16(_) => CoreType::Uint16,
            Variant::Int32(_) => CoreType::Int32,
            Variant::Uint32(_) => CoreType::Uint32,
            Variant::Int64(_) => CoreType::Int64,
            Variant::Uint64(_) => CoreType::Uint64,
            Variant::Float32(_) => CoreType::Float32,
            Variant::Float64(_) => CoreType::Float64,
            Variant::Timestamp(_) => CoreType::Timestamp,
        }
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_void(&self) -> bool {
        matches!(self, Variant::Void)
    }

    /// Reads the value as `T`.
    ///
    /// Returns [`Error::TypeMismatch`] if the variant holds another kind.
    #[inline]
    pub fn get<T: Primitive>(&self) -> Result<T, Error> {
        T::from_variant(self).ok_or(Error::TypeMismatch {
            expected: T::KIND,
            found: self.kind(),
        })
    }

    /// Replaces the held value, and with it the kind.
    #[inline]
    pub fn set<T: Primitive>(&mut self, value: T) {
        *self = value.into_variant();
    }

    /// Drops the held value.
    #[inline]
    pub fn clear(&mut self) {
        *self = Variant::Void;
    }

    /// Encodes the wire record.
    pub fn to_bytes(&self) -> [u8; Variant::WIRE_SIZE] {
        let mut out = [0u8; Variant::WIRE_SIZE];
        out[0] = self.kind().into();
        let slot = &mut out[Self::VALUE_OFFSET..];
        match *self {
            Variant::Void => {}
            Variant::Char(c) => slot[0] = c.0,
            Variant::Int8(x) => slot[..1].copy_from_slice(&x.to_le_bytes()),
            Variant::Uint8(x) => slot[0] = x,
            Variant::Int16(x) => slot[..2].copy_from_slice(&x.to_le_bytes()),
            Variant::Uint16(x) => slot[..2].copy_from_slice(&x.to_le_bytes()),
            Variant::Int32(x) => slot[..4].copy_from_slice(&x.to_le_bytes()),
            Variant::Uint32(x) => slot[..4].copy_from_slice(&x.to_le_bytes()),
            Variant::Int64(x) => slot.copy_from_slice(&x.to_le_bytes()),
            Variant::Uint64(x) => slot.copy_from_slice(&x.to_le_bytes()),
            Variant::Float32(x) => slot[..4].copy_from_slice(&x.to_le_bytes()),
            Variant::Float64(x) => slot.copy_from_slice(&x.to_le_bytes()),
            Variant::Timestamp(t) => {
                slot[..4].copy_from_slice(&t.sec.to_le_bytes());
                slot[4..].copy_from_slice(&t.nsec.to_le_bytes());
            }
        }
        out
    }

    /// Decodes a wire record from the first [`WIRE_SIZE`](Self::WIRE_SIZE)
    /// bytes of `src`.
    ///
    /// Returns [`Error::Truncated`] if `src` is too short and
    /// [`Error::UnknownKind`] for a tag outside the set a variant can hold
    /// (including a nested `VARIANT` tag).
    pub fn from_bytes(src: &[u8]) -> Result<Self, Error> {
        let record = src.first_chunk::<{ Variant::WIRE_SIZE }>().ok_or(Error::Truncated)?;
        let tag = record[0];
        let kind = CoreType::try_from(tag)?;

        let mut slot = [0u8; 8];
        slot.copy_from_slice(&record[Self::VALUE_OFFSET..]);
        let [b0, b1, b2, b3, b4, b5, b6, b7] = slot;
        let lo4 = [b0, b1, b2, b3];
        let hi4 = [b4, b5, b6, b7];

        Ok(match kind {
            CoreType::Void => Variant::Void,
            CoreType::Char => Variant::Char(Char(b0)),
            CoreType::Int8 => Variant::Int8(i8::from_le_bytes([b0])),
            CoreType::Uint8 => Variant::Uint8(b0),
            CoreType::Int16 => Variant::Int16(i16::from_le_bytes([b0, b1])),
            CoreType::Uint16 => Variant::Uint16(u16::from_le_bytes([b0, b1])),
            CoreType::Int32 => Variant::Int32(i32::from_le_bytes(lo4)),
            CoreType::Uint32 => Variant::Uint32(u32::from_le_bytes(lo4)),
            CoreType::Int64 => Variant::Int64(i64::from_le_bytes(slot)),
            CoreType::Uint64 => Variant::Uint64(u64::from_le_bytes(slot)),
            CoreType::Float32 => Variant::Float32(f32::from_le_bytes(lo4)),
            CoreType::Float64 => Variant::Float64(f64::from_le_bytes(slot)),
            CoreType::Timestamp => Variant::Timestamp(Timestamp::new(
                u32::from_le_bytes(lo4),
                u32::from_le_bytes(hi4),
            )),
            CoreType::Variant => return Err(Error::UnknownKind(tag)),
        })
    }
}

/// Reads the value of `v` as `T`; same as [`Variant::get`].
#[inline]
pub fn variant_get<T: Primitive>(v: &Variant) -> Result<T, Error> {
    v.get()
}

/// Stores `value` into `v`; same as [`Variant::set`].
#[inline]
pub fn variant_set<T: Primitive>(value: T, v: &mut Variant) {
    v.set(value)
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;
    use proptest::prelude::*;

    fn round_trip<T: Primitive + PartialEq + core::fmt::Debug>(x: T) {
        let mut v = Variant::default();
        variant_set(x, &mut v);
        assert_eq!(v.kind(), T::KIND);
        assert_eq!(variant_get::<T>(&v), Ok(x));
        assert_eq!(Variant::from_bytes(&v.to_bytes()), Ok(v));
    }

    #[test]
    fn test_boundary_values_round_trip() {
        round_trip(Char(0));
        round_trip(Char(b'z'));
        for x in [0i8, -1, i8::MIN, i8::MAX] {
            round_trip(x);
        }
        for x in [0u8, u8::MAX] {
            round_trip(x);
        }
        for x in [0i16, -1, i16::MIN, i16::MAX] {
            round_trip(x);
        }
        for x in [0u16, u16::MAX] {
            round_trip(x);
        }
        for x in [0i32, -1, i32::MIN, i32::MAX] {
            round_trip(x);
        }
        for x in [0u32, u32::MAX] {
            round_trip(x);
        }
        for x in [0i64, -1, i64::MIN, i64::MAX] {
            round_trip(x);
        }
        for x in [0u64, u64::MAX] {
            round_trip(x);
        }
        for x in [0.0f32, -1.0, f32::MIN, f32::MAX, f32::MIN_POSITIVE, f32::EPSILON] {
            round_trip(x);
        }
        for x in [0.0f64, -1.0, f64::MIN, f64::MAX, f64::MIN_POSITIVE, f64::INFINITY] {
            round_trip(x);
        }
        round_trip(Timestamp::new(0, 0));
        round_trip(Timestamp::new(u32::MAX, 999_999_999));
    }

    #[test]
    fn test_mismatched_read_is_rejected() {
        let v = Variant::from(7u32);
        assert_eq!(
            v.get::<i32>(),
            Err(Error::TypeMismatch {
                expected: CoreType::Int32,
                found: CoreType::Uint32
            })
        );
        assert_eq!(
            Variant::Void.get::<f64>(),
            Err(Error::TypeMismatch {
                expected: CoreType::Float64,
                found: CoreType::Void
            })
        );
        // Reading as Variant always succeeds.
        assert_eq!(v.get::<Variant>(), Ok(v));
    }

    #[test]
    fn test_set_replaces_kind() {
        let mut v = Variant::from(1_i8);
        v.set(Timestamp::new(5, 6));
        assert_eq!(v.kind(), CoreType::Timestamp);
        assert!(v.get::<i8>().is_err());
        v.clear();
        assert!(v.is_void());
        assert_eq!(v, Variant::default());
    }

    #[test]
    fn test_wire_layout() {
        let bytes = Variant::from(0x0102_0304_u32).to_bytes();
        assert_eq!(bytes.len(), CoreType::Variant.size());
        assert_eq!(bytes[0], 7);
        assert_eq!(&bytes[1..8], &[0; 7]);
        assert_eq!(&bytes[8..12], &[4, 3, 2, 1]);
        assert_eq!(&bytes[12..], &[0; 4]);

        let ts = Variant::from(Timestamp::new(1, 2)).to_bytes();
        assert_eq!(ts[0], 12);
        assert_eq!(&ts[8..], &[1, 0, 0, 0, 2, 0, 0, 0]);

        assert_eq!(Variant::Void.to_bytes(), [0; 16]);
    }

    #[test]
    fn test_from_bytes_errors() {
        assert_eq!(Variant::from_bytes(&[6; 15]), Err(Error::Truncated));

        let mut rec = [0u8; 16];
        rec[0] = 99;
        assert_eq!(Variant::from_bytes(&rec), Err(Error::UnknownKind(99)));
        rec[0] = 13;
        assert_eq!(Variant::from_bytes(&rec), Err(Error::UnknownKind(13)));

        // Trailing bytes beyond one record are ignored.
        let mut long = [0u8; 20];
        long[..16].copy_from_slice(&Variant::from(-2_i64).to_bytes());
        assert_eq!(Variant::from_bytes(&long), Ok(Variant::Int64(-2)));
    }

    proptest! {
        #[test]
        fn int_round_trip(x in any::<i64>(), y in any::<u16>(), z in any::<i32>()) {
            prop_assert_eq!(Variant::from(x).get::<i64>(), Ok(x));
            prop_assert_eq!(Variant::from_bytes(&Variant::from(y).to_bytes()), Ok(Variant::Uint16(y)));
            prop_assert_eq!(Variant::from_bytes(&Variant::from(z).to_bytes()), Ok(Variant::Int32(z)));
        }

        #[test]
        fn float_bits_survive_wire(bits in any::<u64>()) {
            let x = f64::from_bits(bits);
            let back = Variant::from_bytes(&Variant::from(x).to_bytes()).unwrap();
            prop_assert_eq!(back.get::<f64>().unwrap().to_bits(), bits);
        }
    }
}
