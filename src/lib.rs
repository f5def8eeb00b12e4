// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-core`
//!
//! `no_std`, allocation-free building blocks for messaging middleware on
//! small targets: fixed-capacity arrays, NUL-terminated text, and the
//! primitive type tags that describe message fields on the wire.
//!
//! ## Contents
//!
//! - [`FixedArray<T, N>`]: exactly `N` `Copy` elements, laid out as `[T; N]`.
//!   [`ArrayView<'a, T, N>`] is its borrowed, read-only counterpart.
//! - [`FixedStr<N>`]: up to `N - 1` bytes of text plus a `0` terminator.
//!   [`StrView<'a, N>`] reads text in place; [`StrBuilder<N>`] appends to it.
//! - [`CoreType`]: the stable `u8` tags of the primitive kinds, with their
//!   sizes and their Rust representation types (see [`kind`]).
//! - [`Variant`]: one tagged primitive value, plus its 16-byte wire record.
//! - [`bounds`]: mask, segment and bounds-checking arithmetic on addresses.
//!
//! ## Error shapes
//!
//! Operations that can fail come in two flavors:
//!
//! - **Asserting**: panic with a diagnostic when a precondition is violated
//!   (e.g. [`FixedArray::at`], [`FixedStr::set`], [`CoreType::size_of_tag`]).
//! - **Validating**: return `Option` or `Result<_, Error>` and leave the value
//!   unchanged (e.g. [`FixedArray::get`], [`FixedArray::try_at`],
//!   [`FixedStr::try_set`], [`Variant::get`], `CoreType::try_from`).
//!
//! Text appends add a third, **truncating** shape: they keep what fits and
//! drop the rest (see [`StrBuilder`]).
//!
//! Capacity mistakes visible at compile time do not build: `front`/`back` on
//! an `N = 0` array, [`StrBuilder<0>`], or [`FixedStr::assign_array`] from a
//! larger array.
//!
//! ## Features
//!
//! - `serde`
//!   - `FixedArray<T, N>` as a sequence of exactly `N` elements
//!     (`T: Deserialize<'de> + Copy + Default`).
//!   - `FixedStr<N>` as a string.
//!   - `CoreType` as its `u8` tag; `Char`, `Timestamp` and `Variant` derived.
//!
//! ## Example
//!
//! ```rust
//! use fixed_core::{CoreType, FixedArray, FixedStr, Variant};
//!
//! let mut samples: FixedArray<i16, 4> = FixedArray::default();
//! samples[1] = -7;
//! assert_eq!(samples.try_at(4), Err(fixed_core::Error::OutOfBounds));
//!
//! let frame: FixedStr<16> = FixedStr::try_from("base_link").unwrap();
//! assert_eq!(frame.length(), 9);
//!
//! let v = Variant::from(3.5_f32);
//! assert_eq!(v.kind(), CoreType::Float32);
//! assert_eq!(v.get::<f32>(), Ok(3.5));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod array;
pub mod bounds;
mod builder;
mod error;
mod index;
mod iter;
pub mod kind;
#[cfg(feature = "serde")]
mod serde;
mod text;
mod variant;
mod view;

// Public exports (crate API surface)
pub use array::FixedArray;
pub use bounds::{
    bit_mask, byte_mask, check_bounds, check_slice_bounds, chunk_size, compute_offset,
    compute_segment, slice_chunk_size, type_mask, SegmentAddr,
};
pub use builder::StrBuilder;
pub use error::Error;
pub use kind::{
    core_type_of, core_type_size, count_of, kinds, wire_size_of, ArrayOf, Char, CoreType, Field,
    Kind, Primitive, ReprOf, Timestamp,
};
pub use text::{FixedStr, StrView};
pub use variant::{variant_get, variant_set, Variant};
pub use view::ArrayView;
