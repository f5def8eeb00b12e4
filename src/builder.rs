// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-place text builder over a [`FixedStr`].
//!
//! Two append policies live side by side:
//!
//! - **Truncating**: [`append_str`](StrBuilder::append_str),
//!   [`append_bytes`](StrBuilder::append_bytes),
//!   [`append_bytes_n`](StrBuilder::append_bytes_n) and
//!   [`append_char`](StrBuilder::append_char) copy what fits and drop the
//!   rest. They always return `true`.
//! - **Strict**: [`append_fmt`](StrBuilder::append_fmt) and
//!   [`append_formatter`](StrBuilder::append_formatter) either append the
//!   whole rendered piece or leave the logical content untouched and return
//!   `false`.
//!
//! The buffer stays terminated after every call.

// Crate imports
use crate::text::{terminated_len, FixedStr};

// Core imports
use core::{fmt, ops::Deref};

/// Appends text into a `FixedStr<N>` while tracking a write cursor.
///
/// ```rust
/// use fixed_core::StrBuilder;
///
/// let mut b: StrBuilder<16> = StrBuilder::new();
/// b.append_str("id=");
/// assert!(b.append_fmt(format_args!("{}", 42)));
/// assert_eq!(b.to_str(), Some("id=42"));
/// assert_eq!(b.free(), 10);
/// ```
#[derive(Clone, Copy)]
pub struct StrBuilder<const N: usize> {
    text: FixedStr<N>,
    curr: usize,
    mark: usize,
}

impl<const N: usize> StrBuilder<N> {
    const NON_EMPTY: () = assert!(N > 0, "StrBuilder requires room for a terminator");

    // Index of the reserved terminator slot.
    const TOP: usize = N - 1;

    /// Constructs an empty builder. Does not compile for `N = 0`.
    #[inline]
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            text: FixedStr::new(),
            curr: 0,
            mark: 0,
        }
    }

    /// Empties the builder and clears the mark.
    #[inline]
    pub fn reset(&mut self) {
        self.curr = 0;
        self.mark = 0;
        self.terminate();
    }

    /// Bytes appended so far.
    #[inline]
    pub const fn length(&self) -> usize {
        self.curr
    }

    /// Bytes that can still be appended.
    #[inline]
    pub const fn free(&self) -> usize {
        Self::TOP - self.curr
    }

    /// Appends as much of `src` as fits.
    #[inline]
    pub fn append_str(&mut self, src: &str) -> bool {
        self.append_bytes(src.as_bytes())
    }

    /// Appends as much of `src` as fits, stopping at its first `0`.
    #[inline]
    pub fn append_bytes(&mut self, src: &[u8]) -> bool {
        self.append_bytes_n(src, src.len())
    }

    /// Appends at most `n` bytes of `src`, stopping at its first `0` and at
    /// the end of the free space.
    pub fn append_bytes_n(&mut self, src: &[u8], n: usize) -> bool {
        let src = &src[..n.min(src.len())];
        let len = terminated_len(src).min(self.free());
        let start = self.curr;
        self.buf_mut()[start..start + len].copy_from_slice(&src[..len]);
        self.curr += len;
        self.terminate();
        true
    }

    /// Appends one byte if there is room.
    #[inline]
    pub fn append_char(&mut self, c: u8) -> bool {
        if self.free() > 0 {
            let at = self.curr;
            self.buf_mut()[at] = c;
            self.curr += 1;
            self.terminate();
        }
        true
    }

    /// Renders `args` into the free space.
    ///
    /// Succeeds only if the rendering is shorter than [`free`](Self::free),
    /// the same room `snprintf` needs for its own terminator. Otherwise the
    /// content is unchanged and `false` is returned.
    ///
    /// ```rust
    /// use fixed_core::StrBuilder;
    ///
    /// let mut b: StrBuilder<6> = StrBuilder::new();
    /// assert!(b.append_fmt(format_args!("{:03}", 7)));
    /// assert!(!b.append_fmt(format_args!("{}", 12)));
    /// assert!(b.append_fmt(format_args!("{}", 1)));
    /// assert_eq!(b.to_str(), Some("0071"));
    /// ```
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> bool {
        self.append_formatter(|free| {
            let mut w = BoundedWriter { buf: free, len: 0 };
            fmt::write(&mut w, args).ok().map(|()| w.len)
        })
    }

    /// Hands the free space to `f`, which returns the number of bytes it
    /// wrote or `None` if its output did not fit.
    ///
    /// The append succeeds only for a count smaller than the free space; any
    /// other count is treated as `None`.
    pub fn append_formatter<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut [u8]) -> Option<usize>,
    {
        let (start, free) = (self.curr, self.free());
        let written = f(&mut self.buf_mut()[start..start + free]);
        match written {
            Some(n) if n < free => {
                self.curr += n;
                self.terminate();
                true
            }
            _ => {
                self.terminate();
                false
            }
        }
    }

    /// Former name of [`append_formatter`](Self::append_formatter).
    #[deprecated(note = "use `append_formatter`")]
    #[inline]
    pub fn append_frmttr<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut [u8]) -> Option<usize>,
    {
        self.append_formatter(f)
    }

    /// Remembers the current cursor for a later [`rewind`](Self::rewind).
    #[inline]
    pub fn mark(&mut self) {
        self.mark = self.curr;
    }

    /// Drops everything appended since the last [`mark`](Self::mark).
    #[inline]
    pub fn rewind(&mut self) {
        self.curr = self.mark;
        self.terminate();
    }

    /// The built text.
    #[inline]
    pub const fn as_text(&self) -> &FixedStr<N> {
        &self.text
    }

    /// Consumes the builder, returning the built text.
    #[inline]
    pub const fn into_text(self) -> FixedStr<N> {
        self.text
    }

    /// Appended bytes, terminator excluded.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.text.buf.as_slice()[..self.curr]
    }

    /// Appended bytes as `&str`, or `None` if they are not valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    #[inline]
    fn buf_mut(&mut self) -> &mut [u8] {
        self.text.buf.as_mut_slice()
    }

    #[inline]
    fn terminate(&mut self) {
        let at = self.curr;
        self.buf_mut()[at] = 0;
    }
}

impl<const N: usize> Default for StrBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for StrBuilder<N> {
    type Target = FixedStr<N>;
    fn deref(&self) -> &FixedStr<N> {
        &self.text
    }
}

impl<const N: usize> fmt::Debug for StrBuilder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrBuilder")
            .field("text", &self.text)
            .field("curr", &self.curr)
            .field("mark", &self.mark)
            .finish()
    }
}

impl<const N: usize> fmt::Display for StrBuilder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

/// Truncating writes; `Err` signals that bytes were dropped.
impl<const N: usize> fmt::Write for StrBuilder<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let before = self.curr;
        self.append_str(s);
        if self.curr - before == s.len() {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}

// Fails instead of truncating once `buf` is full.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        let dst = self.buf.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StrBuilder;
    use core::fmt::Write;
    use proptest::prelude::*;

    #[test]
    fn test_new_and_reset() {
        let mut b: StrBuilder<8> = StrBuilder::new();
        assert_eq!(b.length(), 0);
        assert_eq!(b.free(), 7);
        assert!(b.is_empty());
        b.append_str("abc");
        b.mark();
        b.reset();
        assert_eq!(b.length(), 0);
        assert_eq!(b.free(), 7);
        assert_eq!(b.as_bytes(), b"");
        b.append_str("x");
        b.rewind();
        assert_eq!(b.length(), 0);
    }

    #[test]
    fn test_single_slot_builder_has_no_room() {
        let mut b: StrBuilder<1> = StrBuilder::new();
        assert_eq!(b.free(), 0);
        assert!(b.append_str("abc"));
        assert!(b.append_char(b'x'));
        assert_eq!(b.length(), 0);
        assert!(!b.append_fmt(format_args!("")));
        assert!(!b.append_fmt(format_args!("1")));
        assert!(!b.append_formatter(|_| Some(0)));
        assert_eq!(b.length(), 0);
    }

    #[test]
    fn test_truncating_appends() {
        let mut b: StrBuilder<6> = StrBuilder::new();
        assert!(b.append_str("abc"));
        assert!(b.append_str("defgh"));
        assert_eq!(b.to_str(), Some("abcde"));
        assert_eq!(b.free(), 0);
        assert!(b.append_char(b'z'));
        assert_eq!(b.as_text(), &"abcde");
        assert_eq!(b.length(), b.as_text().length());
    }

    #[test]
    fn test_append_stops_at_nul_and_n() {
        let mut b: StrBuilder<16> = StrBuilder::new();
        b.append_bytes(b"ab\0cd");
        assert_eq!(b.as_bytes(), b"ab");
        b.append_bytes_n(b"wxyz", 2);
        assert_eq!(b.as_bytes(), b"abwx");
        b.append_bytes_n(b"q", 10);
        assert_eq!(b.as_bytes(), b"abwxq");
        b.append_char(b'!');
        assert_eq!(b.to_str(), Some("abwxq!"));
    }

    #[test]
    fn test_append_fmt_is_all_or_nothing() {
        let mut b: StrBuilder<8> = StrBuilder::new();
        b.append_str("ab");
        assert!(!b.append_fmt(format_args!("{}", 123_456)));
        assert_eq!(b.to_str(), Some("ab"));
        assert_eq!(b.as_text().length(), 2);
        assert!(b.append_fmt(format_args!("{}-{}", 1, 2)));
        assert_eq!(b.to_str(), Some("ab1-2"));
        assert_eq!(b.free(), 2);
        assert!(!b.append_fmt(format_args!("{}", 99)));
        assert_eq!(b.to_str(), Some("ab1-2"));
        assert!(b.append_fmt(format_args!("{}", 9)));
        assert_eq!(b.to_str(), Some("ab1-29"));
        assert_eq!(b.free(), 1);
    }

    #[test]
    fn test_strict_append_needs_room_for_terminator() {
        let mut b: StrBuilder<4> = StrBuilder::new();
        assert_eq!(b.free(), 3);
        assert!(!b.append_fmt(format_args!("123")));
        assert!(!b.append_formatter(|free| {
            free.copy_from_slice(b"123");
            Some(3)
        }));
        assert_eq!(b.length(), 0);
        assert_eq!(b.as_text().length(), 0);
        assert!(b.append_fmt(format_args!("12")));
        assert_eq!(b.to_str(), Some("12"));
        assert_eq!(b.free(), 1);
    }

    #[test]
    fn test_append_formatter() {
        let mut b: StrBuilder<8> = StrBuilder::new();
        assert!(b.append_formatter(|free| {
            free[..3].copy_from_slice(b"abc");
            Some(3)
        }));
        assert!(!b.append_formatter(|free| {
            free.fill(b'!');
            None
        }));
        assert_eq!(b.as_text(), &"abc");
        assert!(!b.append_formatter(|free| Some(free.len() + 1)));
        assert!(!b.append_formatter(|free| Some(free.len())));
        assert_eq!(b.length(), 3);
        #[allow(deprecated)]
        let ok = b.append_frmttr(|free| {
            free[0] = b'd';
            Some(1)
        });
        assert!(ok);
        assert_eq!(b.to_str(), Some("abcd"));
    }

    #[test]
    fn test_mark_and_rewind() {
        let mut b: StrBuilder<32> = StrBuilder::new();
        b.append_str("topic/");
        b.mark();
        b.append_str("first");
        b.rewind();
        b.append_str("second");
        assert_eq!(b.to_str(), Some("topic/second"));
        assert_eq!(b.into_text(), "topic/second");
    }

    #[test]
    fn test_fmt_write_reports_truncation() {
        let mut b: StrBuilder<5> = StrBuilder::new();
        assert!(write!(b, "{}", 12).is_ok());
        assert!(write!(b, "{}", 345).is_err());
        assert_eq!(b.to_str(), Some("1234"));
    }

    #[test]
    fn test_deref_and_display() {
        let mut b: StrBuilder<8> = StrBuilder::new();
        b.append_str("ok");
        assert_eq!(b.capacity(), 7);
        assert_eq!(alloc::format!("{b}"), "ok");
    }

    proptest! {
        #[test]
        fn builder_stays_terminated(
            ops in proptest::collection::vec(("[a-z]{0,6}", any::<bool>()), 0..12)
        ) {
            let mut b: StrBuilder<10> = StrBuilder::new();
            for (piece, strict) in &ops {
                let before = b.length();
                if *strict {
                    let fits = piece.len() < b.free();
                    prop_assert_eq!(b.append_fmt(format_args!("{piece}")), fits);
                    let expected = if fits { before + piece.len() } else { before };
                    prop_assert_eq!(b.length(), expected);
                } else {
                    b.append_str(piece);
                    prop_assert_eq!(b.length(), before + piece.len().min(9 - before));
                }
                prop_assert!(b.length() <= 9);
                prop_assert_eq!(b.length() + b.free(), 9);
                prop_assert_eq!(b.as_text().length(), b.length());
            }
        }
    }
}
