// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text equality.
//!
//! `==` compares payloads: two texts are equal when the bytes before their
//! terminators match, whatever their capacities. [`FixedStr::eq_bounded`]
//! keeps the C `strncmp(a, b, min(N, M))` rule for code that relies on it.

// Crate imports
use crate::text::{FixedStr, StrView};

/// `strncmp(a, b, min(len a, len b)) == 0` over two raw buffers.
fn bounded_eq(a: &[u8], b: &[u8]) -> bool {
    for (&x, &y) in a.iter().zip(b) {
        if x != y {
            return false;
        }
        if x == 0 {
            break;
        }
    }
    true
}

impl<const N: usize> FixedStr<N> {
    /// Compares at most `min(N, M)` bytes, stopping after the first
    /// terminator.
    ///
    /// When both texts are terminated within those bytes this agrees with
    /// `==`. It differs only when the smaller buffer is unterminated: its
    /// `min(N, M)` bytes are then matched against a prefix of the other text.
    ///
    /// ```rust
    /// use fixed_core::FixedStr;
    ///
    /// let full: FixedStr<2> = FixedStr::from_raw(*b"ab");
    /// let long: FixedStr<8> = FixedStr::try_from("abc").unwrap();
    /// assert!(full != long);
    /// assert!(full.eq_bounded(long.as_view()));
    ///
    /// let short: FixedStr<3> = FixedStr::try_from("ab").unwrap();
    /// assert!(!short.eq_bounded(long.as_view()));
    /// ```
    #[inline]
    pub fn eq_bounded<const M: usize>(&self, other: StrView<'_, M>) -> bool {
        self.as_view().eq_bounded(other)
    }
}

impl<const N: usize> StrView<'_, N> {
    /// See [`FixedStr::eq_bounded`].
    #[inline]
    pub fn eq_bounded<const M: usize>(&self, other: StrView<'_, M>) -> bool {
        bounded_eq(
            self.as_array_view().as_slice(),
            other.as_array_view().as_slice(),
        )
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedStr<M>> for FixedStr<N> {
    fn eq(&self, other: &FixedStr<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl<const N: usize> Eq for FixedStr<N> {}

impl<const N: usize, const M: usize> PartialEq<StrView<'_, M>> for StrView<'_, N> {
    fn eq(&self, other: &StrView<'_, M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl<const N: usize> Eq for StrView<'_, N> {}

impl<const N: usize, const M: usize> PartialEq<StrView<'_, M>> for FixedStr<N> {
    fn eq(&self, other: &StrView<'_, M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedStr<M>> for StrView<'_, N> {
    fn eq(&self, other: &FixedStr<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

macro_rules! eq_plain {
    ($($t:ty),* $(,)?) => {$(
        impl<const N: usize> PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.as_bytes() == other.as_bytes()
            }
        }
        impl<const N: usize> PartialEq<&str> for $t {
            fn eq(&self, other: &&str) -> bool {
                self.as_bytes() == other.as_bytes()
            }
        }
        impl<const N: usize> PartialEq<[u8]> for $t {
            fn eq(&self, other: &[u8]) -> bool {
                self.as_bytes() == other
            }
        }
        impl<const N: usize> PartialEq<$t> for str {
            fn eq(&self, other: &$t) -> bool {
                self.as_bytes() == other.as_bytes()
            }
        }
        impl<const N: usize> PartialEq<$t> for &str {
            fn eq(&self, other: &$t) -> bool {
                self.as_bytes() == other.as_bytes()
            }
        }
    )*};
}

eq_plain!(FixedStr<N>, StrView<'_, N>);

#[cfg(test)]
mod tests {
    // Imports
    use crate::{FixedStr, StrView};
    use proptest::prelude::*;

    fn text<const N: usize>(s: &str) -> FixedStr<N> {
        FixedStr::try_from(s).unwrap()
    }

    #[test]
    fn test_equal_contents_across_capacities() {
        let a: FixedStr<4> = text("abc");
        let b: FixedStr<16> = text("abc");
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(a.as_view(), b.as_view());
        assert_eq!(a, b.as_view());
        assert_eq!(a.as_view(), b);
    }

    #[test]
    fn test_bytes_after_terminator_ignored() {
        let a: FixedStr<6> = FixedStr::from_raw(*b"ab\0xyz");
        let b: FixedStr<6> = FixedStr::from_raw(*b"ab\0\0\0\0");
        assert_eq!(a, b);
    }

    #[test]
    fn test_terminated_prefix_is_not_equal() {
        let short: FixedStr<3> = text("ab");
        let long: FixedStr<8> = text("abcdef");
        assert_ne!(short, long);
        assert!(!short.eq_bounded(long.as_view()));
        assert!(!long.eq_bounded(short.as_view()));
    }

    #[test]
    fn test_unterminated_buffer_matches_prefix_when_bounded() {
        let full: FixedStr<2> = FixedStr::from_raw(*b"ab");
        let long: FixedStr<8> = text("abc");
        assert_ne!(full, long);
        assert_ne!(full.as_view(), long.as_view());
        assert!(full.eq_bounded(long.as_view()));
        assert!(long.eq_bounded(full.as_view()));
        assert!(full.as_view().eq_bounded(long.as_view()));

        let other: FixedStr<8> = text("axc");
        assert!(!full.eq_bounded(other.as_view()));
    }

    #[test]
    fn test_bounded_stops_at_terminator() {
        let a: FixedStr<8> = text("ab");
        let b: FixedStr<8> = text("abc");
        assert!(!a.eq_bounded(b.as_view()));
        let c: FixedStr<8> = FixedStr::from_raw(*b"ab\0qqqqq");
        assert!(a.eq_bounded(c.as_view()));
    }

    #[test]
    fn test_plain_string_comparisons() {
        let s: FixedStr<8> = text("imu");
        assert_eq!(s, "imu");
        assert_eq!("imu", s);
        assert!(s == *"imu");
        assert!(s == b"imu"[..]);
        assert_ne!(s, "imu0");
        let v: StrView<'_, 8> = s.as_view();
        assert_eq!(v, "imu");
        assert_eq!("imu", v);
    }

    proptest! {
        #[test]
        fn equality_matches_payload(a in "[a-c]{0,5}", b in "[a-c]{0,5}") {
            let x: FixedStr<6> = text(&a);
            let y: FixedStr<10> = text(&b);
            prop_assert_eq!(x == y, a == b);
            prop_assert_eq!(x.as_view() == y.as_view(), a == b);
            prop_assert_eq!(x.eq_bounded(y.as_view()), a == b);
        }
    }
}
