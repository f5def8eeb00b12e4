// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Primitive kinds, their sizes and their Rust representations.
//!
//! [`CoreType`] is the closed set of kind tags carried on the wire. Three
//! tables connect tags and types:
//!
//! - **size**: [`CoreType::size`] maps a tag to its byte size;
//! - **forward**: the marker types in [`kinds`] map a tag to its
//!   representation type at compile time ([`ReprOf`]);
//! - **reverse**: [`Primitive::KIND`] maps a representation type back to
//!   its tag.
//!
//! [`Field`] extends the reverse mapping to message fields (scalars, arrays
//! and text), reporting the element kind and element count.
//!
//! Typed literals are Rust's own numeric suffixes: `5_i8` is an INT8 value,
//! `1.5_f32` a FLOAT32 one.

// Crate imports
use crate::{array::FixedArray, text::FixedStr, variant::Variant};

// Core imports
use core::fmt;

/// Kind tag of a primitive value.
///
/// The numeric values are part of the wire format and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CoreType {
    /// No value.
    Void = 0,
    /// One byte of text.
    Char = 1,
    /// `i8`.
    Int8 = 2,
    /// `u8`.
    Uint8 = 3,
    /// `i16`.
    Int16 = 4,
    /// `u16`.
    Uint16 = 5,
    /// `i32`.
    Int32 = 6,
    /// `u32`.
    Uint32 = 7,
    /// `i64`.
    Int64 = 8,
    /// `u64`.
    Uint64 = 9,
    /// `f32`.
    Float32 = 10,
    /// `f64`.
    Float64 = 11,
    /// Seconds and nanoseconds, see [`Timestamp`].
    Timestamp = 12,
    /// A tagged value of any other kind, see [`Variant`].
    Variant = 13,
}

impl CoreType {
    /// Every kind, in tag order.
    pub const ALL: [CoreType; 14] = [
        CoreType::Void,
        CoreType::Char,
        CoreType::Int8,
        CoreType::Uint8,
        CoreType::Int16,
        CoreType::Uint16,
        CoreType::Int32,
        CoreType::Uint32,
        CoreType::Int64,
        CoreType::Uint64,
        CoreType::Float32,
        CoreType::Float64,
        CoreType::Timestamp,
        CoreType::Variant,
    ];

    /// Byte size of one value of this kind.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            CoreType::Void => 0,
            CoreType::Char | CoreType::Int8 | CoreType::Uint8 => 1,
            CoreType::Int16 | CoreType::Uint16 => 2,
            CoreType::Int32 | CoreType::Uint32 | CoreType::Float32 => 4,
            CoreType::Int64 | CoreType::Uint64 | CoreType::Float64 => 8,
            CoreType::Timestamp => Timestamp::SIZE,
            CoreType::Variant => Variant::WIRE_SIZE,
        }
    }

    /// Byte size of the kind encoded as `tag`.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not a known kind. Use
    /// [`CoreType::try_from`] to validate untrusted tags.
    #[inline]
    #[track_caller]
    pub fn size_of_tag(tag: u8) -> usize {
        match CoreType::try_from(tag) {
            Ok(kind) => kind.size(),
            Err(_) => panic!("undefined CoreType tag {tag}"),
        }
    }

    /// Upper-case wire name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            CoreType::Void => "VOID",
            CoreType::Char => "CHAR",
            CoreType::Int8 => "INT8",
            CoreType::Uint8 => "UINT8",
            CoreType::Int16 => "INT16",
            CoreType::Uint16 => "UINT16",
            CoreType::Int32 => "INT32",
            CoreType::Uint32 => "UINT32",
            CoreType::Int64 => "INT64",
            CoreType::Uint64 => "UINT64",
            CoreType::Float32 => "FLOAT32",
            CoreType::Float64 => "FLOAT64",
            CoreType::Timestamp => "TIMESTAMP",
            CoreType::Variant => "VARIANT",
        }
    }
}

/// Byte size of one value of `kind`; same as [`CoreType::size`].
#[inline]
pub const fn core_type_size(kind: CoreType) -> usize {
    kind.size()
}

impl fmt::Display for CoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<CoreType> for u8 {
    fn from(kind: CoreType) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for CoreType {
    type Error = crate::Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        CoreType::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(crate::Error::UnknownKind(tag))
    }
}

/// One byte of text, the representation of [`CoreType::Char`].
///
/// A distinct type from `u8` so that CHAR and UINT8 map back to different
/// kinds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Char(pub u8);

impl From<u8> for Char {
    fn from(c: u8) -> Self {
        Char(c)
    }
}

impl From<Char> for u8 {
    fn from(c: Char) -> Self {
        c.0
    }
}

/// A point in time as whole seconds plus nanoseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Timestamp {
    /// Seconds.
    pub sec: u32,
    /// Nanoseconds within the second.
    pub nsec: u32,
}

impl Timestamp {
    /// Byte size of the representation.
    pub const SIZE: usize = 8;

    /// Constructs a timestamp.
    #[inline]
    pub const fn new(sec: u32, nsec: u32) -> Self {
        Self { sec, nsec }
    }
}

mod private {
    pub trait Sealed {}
}

/// A representation type with a kind tag (the reverse mapping).
///
/// Implemented for [`Char`], the fixed-width integers, `f32`, `f64`,
/// [`Timestamp`] and [`Variant`]. The set is closed.
pub trait Primitive: Copy + private::Sealed {
    /// Kind tag of this type.
    const KIND: CoreType;
    /// Byte size of one value.
    const SIZE: usize = Self::KIND.size();

    /// Wraps the value in a [`Variant`] tagged with [`Self::KIND`].
    fn into_variant(self) -> Variant;

    /// Extracts the value if `v` holds this kind.
    fn from_variant(v: &Variant) -> Option<Self>;
}

/// A compile-time kind marker (the forward mapping).
pub trait Kind {
    /// Kind tag of the marker.
    const KIND: CoreType;
    /// Representation type of the kind.
    type Repr: Primitive;
    /// Field type holding `N` values of the kind: [`FixedStr<N>`] for
    /// CHAR, [`FixedArray<Self::Repr, N>`] for every other kind.
    type Array<const N: usize>: Field + Copy;
}

/// Representation type selected by kind marker `K`.
pub type ReprOf<K> = <K as Kind>::Repr;

/// Field type holding `N` values of kind `K` (text for CHAR).
pub type ArrayOf<K, const N: usize> = <K as Kind>::Array<N>;

/// Marker types, one per non-void kind.
pub mod kinds {
    use super::{CoreType, Kind};
    use crate::{array::FixedArray, text::FixedStr};

    macro_rules! kind_markers {
        ($($marker:ident => $repr:ty),* $(,)?) => {
            $(
                #[doc = concat!("Marker for [`CoreType::", stringify!($marker), "`].")]
                #[derive(Debug, Clone, Copy, PartialEq, Eq)]
                pub struct $marker;

                impl Kind for $marker {
                    const KIND: CoreType = CoreType::$marker;
                    type Repr = $repr;
                    type Array<const N: usize> = FixedArray<$repr, N>;
                }
            )*
        };
    }

    /// Marker for [`CoreType::Char`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Char;

    impl Kind for Char {
        const KIND: CoreType = CoreType::Char;
        type Repr = super::Char;
        type Array<const N: usize> = FixedStr<N>;
    }

    kind_markers! {
        Int8 => i8,
        Uint8 => u8,
        Int16 => i16,
        Uint16 => u16,
        Int32 => i32,
        Uint32 => u32,
        Int64 => i64,
        Uint64 => u64,
        Float32 => f32,
        Float64 => f64,
        Timestamp => super::Timestamp,
        Variant => crate::variant::Variant,
    }
}

/// A message field: its element kind and how many elements it holds.
pub trait Field {
    /// Element kind.
    const KIND: CoreType;
    /// Element count (1 for scalars).
    const COUNT: usize;
}

macro_rules! scalar_fields {
    ($($t:ty),* $(,)?) => {
        $(
            impl Field for $t {
                const KIND: CoreType = <$t as Primitive>::KIND;
                const COUNT: usize = 1;
            }

            impl<const N: usize> Field for [$t; N] {
                const KIND: CoreType = <$t as Primitive>::KIND;
                const COUNT: usize = N;
            }

            impl<const N: usize> Field for FixedArray<$t, N> {
                const KIND: CoreType = <$t as Primitive>::KIND;
                const COUNT: usize = N;
            }
        )*
    };
}

scalar_fields!(Char, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, Timestamp, Variant);

impl<const N: usize> Field for FixedStr<N> {
    const KIND: CoreType = CoreType::Char;
    const COUNT: usize = N;
}

/// Element kind of a field value.
#[inline]
pub const fn core_type_of<F: Field>(_: &F) -> CoreType {
    F::KIND
}

/// Element count of a field value.
#[inline]
pub const fn count_of<F: Field>(_: &F) -> usize {
    F::COUNT
}

/// Total byte size of a field value on the wire.
#[inline]
pub const fn wire_size_of<F: Field>(_: &F) -> usize {
    F::KIND.size() * F::COUNT
}

macro_rules! primitives {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Primitive for $t {
                const KIND: CoreType = CoreType::$kind;

                #[inline]
                fn into_variant(self) -> Variant {
                    Variant::$kind(self)
                }

                #[inline]
                fn from_variant(v: &Variant) -> Option<Self> {
                    match *v {
                        Variant::$kind(x) => Some(x),
                        _ => None,
                    }
                }
            }

            impl From<$t> for Variant {
                #[inline]
                fn from(x: $t) -> Self {
                    Variant::$kind(x)
                }
            }
        )*
    };
}

primitives! {
    Char => Char,
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    i64 => Int64,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    Timestamp => Timestamp,
}

impl private::Sealed for Variant {}

impl Primitive for Variant {
    const KIND: CoreType = CoreType::Variant;

    #[inline]
    fn into_variant(self) -> Variant {
        self
    }

    #[inline]
    fn from_variant(v: &Variant) -> Option<Self> {
        Some(*v)
    }
}
