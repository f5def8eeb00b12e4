// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for the validating call shapes.
//!
//! Contract violations on the asserting shapes (`at`, `set`, ...) panic
//! instead; these errors are only returned by `get`/`try_*` style methods.
//! They are `Copy` and implement `core::error::Error`.

// Crate imports
use crate::kind::CoreType;

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the validating operations of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The source does not fit the fixed capacity.
    Full,
    /// An index was outside `0..N`.
    OutOfBounds,
    /// A view was built from a slice of the wrong length.
    LengthMismatch {
        /// Number of elements the view needs.
        expected: usize,
        /// Number of elements the slice had.
        found: usize,
    },
    /// A [`Variant`](crate::Variant) was read through a kind it does not hold.
    TypeMismatch {
        /// Kind requested by the caller.
        expected: CoreType,
        /// Kind actually stored.
        found: CoreType,
    },
    /// A kind tag outside the closed [`CoreType`] set.
    UnknownKind(u8),
    /// A wire buffer ended before a complete record.
    Truncated,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "length mismatch: expected {expected}, found {found}")
            }
            Self::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            Self::UnknownKind(tag) => write!(f, "unknown kind tag {tag}"),
            Self::Truncated => f.write_str("truncated record"),
        }
    }
}

impl CoreError for Error {}
