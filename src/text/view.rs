// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    text::{terminated_len, write_lossy, FixedStr},
    view::ArrayView,
};

// Core imports
use core::{
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
};

/// Read-only, NUL-terminated text over a borrowed `N`-byte buffer.
///
/// Typically obtained with [`FixedStr::as_view`] or built over a field of a
/// received message.
///
/// ```rust
/// use fixed_core::StrView;
///
/// let raw = *b"topic\0\0\0";
/// let v = StrView::new(&raw);
/// assert_eq!(v.length(), 5);
/// assert_eq!(v, "topic");
/// ```
pub struct StrView<'a, const N: usize> {
    data: ArrayView<'a, u8, N>,
}

impl<'a, const N: usize> StrView<'a, N> {
    /// Wraps a borrowed buffer.
    #[inline]
    pub const fn new(data: &'a [u8; N]) -> Self {
        Self {
            data: ArrayView::new(data),
        }
    }

    /// Views the first `N` bytes of `src`.
    ///
    /// Returns [`Error::LengthMismatch`] if `src` is shorter than `N`.
    #[inline]
    pub fn from_prefix(src: &'a [u8]) -> Result<Self, Error> {
        ArrayView::from_prefix(src).map(|data| Self { data })
    }

    /// Capacity of the viewed buffer (always `N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Number of bytes before the first terminator, or `N`.
    #[inline]
    pub fn length(&self) -> usize {
        terminated_len(self.data.as_slice())
    }

    /// Returns `true` if the text has no payload.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Payload bytes, terminator excluded.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        let raw = self.data.as_slice();
        &raw[..terminated_len(raw)]
    }

    /// Payload plus terminator, or `None` if the buffer is unterminated.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> Option<&'a [u8]> {
        let raw = self.data.as_slice();
        raw.get(..=terminated_len(raw))
    }

    /// Payload as `&str`, or `None` if it is not valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Payload as a C string, or `None` if the buffer is unterminated.
    #[inline]
    pub fn as_cstr(&self) -> Option<&'a CStr> {
        CStr::from_bytes_until_nul(self.data.as_slice()).ok()
    }

    /// Raw pointer to the first viewed byte.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// The whole viewed buffer, bytes after the terminator included.
    #[inline]
    pub const fn as_array_view(&self) -> ArrayView<'a, u8, N> {
        self.data
    }

    /// Copies the viewed buffer into an owned [`FixedStr`].
    #[inline]
    pub fn to_fixed_str(&self) -> FixedStr<N> {
        FixedStr::from_raw(*self.data.as_array())
    }
}

impl<const N: usize> Copy for StrView<'_, N> {}
impl<const N: usize> Clone for StrView<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StrView<'a, N> {
    fn from(data: &'a [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<'a, const N: usize> From<&'a FixedStr<N>> for StrView<'a, N> {
    fn from(text: &'a FixedStr<N>) -> Self {
        text.as_view()
    }
}

impl<'a, const N: usize> From<ArrayView<'a, u8, N>> for StrView<'a, N> {
    fn from(data: ArrayView<'a, u8, N>) -> Self {
        Self { data }
    }
}

impl<'a, const N: usize> TryFrom<&'a [u8]> for StrView<'a, N> {
    type Error = Error;

    /// Requires `src.len() == N`.
    fn try_from(src: &'a [u8]) -> Result<Self, Error> {
        ArrayView::try_from(src).map(|data| Self { data })
    }
}

impl<const N: usize> Hash for StrView<'_, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl<const N: usize> fmt::Debug for StrView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl<const N: usize> fmt::Display for StrView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lossy(self.as_bytes(), f)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, FixedStr, StrView};
    use alloc::{format, string::ToString};

    #[test]
    fn test_view_reads_payload() {
        let raw = *b"abc\0zz";
        let v = StrView::new(&raw);
        assert_eq!(v.size(), 6);
        assert_eq!(v.length(), 3);
        assert!(!v.is_empty());
        assert_eq!(v.as_bytes(), b"abc");
        assert_eq!(v.as_bytes_with_nul(), Some(&b"abc\0"[..]));
        assert_eq!(v.to_str(), Some("abc"));
        assert_eq!(v.as_cstr().unwrap().to_bytes(), b"abc");
        assert_eq!(v.as_ptr(), raw.as_ptr());
    }

    #[test]
    fn test_view_outlives_borrow_of_wrapper() {
        let raw = *b"hi\0\0";
        let bytes = {
            let v = StrView::new(&raw);
            v.as_bytes()
        };
        assert_eq!(bytes, b"hi");
    }

    #[test]
    fn test_from_fixed_str() {
        let mut s: FixedStr<8> = FixedStr::new();
        s.set("pose");
        let v: StrView<'_, 8> = (&s).into();
        assert_eq!(v, "pose");
        assert_eq!(v.to_fixed_str(), s);
        assert_eq!(format!("{v}"), "pose");
        assert_eq!(format!("{v:?}"), "\"pose\"");
        assert_eq!(v.to_string(), s.to_string());
    }

    #[test]
    fn test_checked_slice_constructors() {
        let raw = b"abcdef";
        let v = StrView::<4>::from_prefix(raw).unwrap();
        assert_eq!(v.length(), 4);
        assert_eq!(v.as_bytes_with_nul(), None);
        assert_eq!(
            StrView::<8>::from_prefix(raw).unwrap_err(),
            Error::LengthMismatch {
                expected: 8,
                found: 6
            }
        );
        assert!(StrView::<6>::try_from(&raw[..]).is_ok());
        assert!(StrView::<5>::try_from(&raw[..]).is_err());
    }

    #[test]
    fn test_zero_size_view() {
        let raw: [u8; 0] = [];
        let v = StrView::new(&raw);
        assert_eq!(v.length(), 0);
        assert!(v.is_empty());
        assert_eq!(v.as_cstr(), None);
    }
}
