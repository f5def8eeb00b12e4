// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-capacity, NUL-terminated text.
//!
//! [`FixedStr<N>`] stores up to `N - 1` payload bytes followed by a `0`
//! terminator inside a [`FixedArray<u8, N>`](crate::FixedArray). This is the
//! text encoding used in pools and on the wire, so the type has no length
//! field: [`length`](FixedStr::length) scans for the terminator.
//!
//! [`StrView<'a, N>`] is the read-only borrowed counterpart.

mod assign;
mod cmp;
mod view;

pub use view::StrView;

// Crate imports
use crate::array::FixedArray;

// Core imports
use core::{
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
};

/// Index of the first `0` in `buf`, or `buf.len()` if there is none.
#[inline]
pub(crate) fn terminated_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

pub(crate) fn write_lossy(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for chunk in bytes.utf8_chunks() {
        f.write_str(chunk.valid())?;
        if !chunk.invalid().is_empty() {
            f.write_str("\u{FFFD}")?;
        }
    }
    Ok(())
}

/// A NUL-terminated byte string with a fixed capacity of `N` bytes.
///
/// At most `N - 1` payload bytes fit; the last slot is reserved for the
/// terminator. Bytes after the terminator are not part of the text.
///
/// # Assignment shapes
///
/// - [`set`](FixedStr::set) / [`set_bytes`](FixedStr::set_bytes) panic when
///   the source does not fit.
/// - [`try_set`](FixedStr::try_set) / [`try_set_bytes`](FixedStr::try_set_bytes)
///   return [`crate::Error::Full`] and leave the text unchanged.
///
/// # Examples
///
/// ```rust
/// use fixed_core::FixedStr;
///
/// let mut name: FixedStr<8> = FixedStr::new();
/// name.set("sensor");
/// assert_eq!(name.length(), 6);
/// assert_eq!(name, "sensor");
/// assert!(name.try_set("too long!").is_err());
/// assert_eq!(name.to_str(), Some("sensor"));
/// ```
#[repr(transparent)]
pub struct FixedStr<const N: usize> {
    pub(crate) buf: FixedArray<u8, N>,
}

impl<const N: usize> FixedStr<N> {
    /// Capacity of the backing buffer, terminator included.
    pub const SIZE: usize = N;

    /// Constructs an empty text (all bytes zero).
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: FixedArray::filled(0),
        }
    }

    /// Capacity of the backing buffer (always `N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Maximum number of payload bytes (`N - 1`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N.saturating_sub(1)
    }

    /// Number of bytes before the first terminator, or `N` if the buffer
    /// holds no terminator.
    #[inline]
    pub fn length(&self) -> usize {
        terminated_len(self.buf.as_slice())
    }

    /// Returns `true` if the text has no payload.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Empties the text by writing a terminator at index 0.
    ///
    /// The rest of the buffer is left as is.
    #[inline]
    pub fn clear(&mut self) {
        if let Some(first) = self.buf.as_mut_slice().first_mut() {
            *first = 0;
        }
    }

    /// Payload bytes, terminator excluded.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_slice()[..self.length()]
    }

    /// Payload bytes plus terminator, or `None` if the buffer is unterminated.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        let len = self.length();
        self.buf.as_slice().get(..=len)
    }

    /// Payload as `&str`, or `None` if it is not valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Payload as a C string, or `None` if the buffer is unterminated.
    #[inline]
    pub fn as_cstr(&self) -> Option<&CStr> {
        CStr::from_bytes_until_nul(self.buf.as_slice()).ok()
    }

    /// Raw pointer to the first byte, for handing the text to C code.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.buf.as_ptr()
    }

    /// The whole backing buffer, bytes after the terminator included.
    #[inline]
    pub const fn as_array(&self) -> &FixedArray<u8, N> {
        &self.buf
    }

    /// Borrows the text as a read-only [`StrView`].
    #[inline]
    pub const fn as_view(&self) -> StrView<'_, N> {
        StrView::new(self.buf.as_array())
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Copy for FixedStr<N> {}
impl<const N: usize> Clone for FixedStr<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize> Hash for FixedStr<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lossy(self.as_bytes(), f)
    }
}
