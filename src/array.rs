// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedArray` type and its inherent API.
//!
//! `FixedArray<T, N>` is a fixed-size sequence of `Copy` elements. Unlike a
//! vector it has no logical length: all `N` slots are always initialized and
//! visible. Its layout is exactly `[T; N]` so that pool and wire code can
//! address it as raw contiguous storage.
//!
//! No heap allocations are performed.

mod access;
mod copy;

// Crate imports
use crate::view::ArrayView;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-size, inline array of `Copy` elements.
///
/// `FixedArray<T, N>` owns exactly `N` contiguous elements:
///
/// - the size is a compile-time constant (`N`), there is no length field;
/// - the representation is `#[repr(transparent)]` over `[T; N]`, with no
///   prefix or padding beyond the element alignment;
/// - `T: Copy` is required, and the array itself is `Copy`;
/// - no heap allocations are performed.
///
/// # Access shapes
///
/// Element access comes in two shapes:
///
/// - **Asserting**: [`at`](FixedArray::at), [`front`](FixedArray::front),
///   [`back`](FixedArray::back) and plain indexing (`a[i]`) panic on an
///   index outside `0..N`. A violation is a programming error.
/// - **Validating**: [`get`](FixedArray::get) returns `Option`, and
///   [`try_at`](FixedArray::try_at) returns [`crate::Error::OutOfBounds`].
///
/// # Zero size
///
/// `FixedArray<T, 0>` is fully defined: it has no elements, is empty,
/// occupies zero bytes and iterates over nothing. `front`/`back` do not
/// compile for `N = 0`.
///
/// # Examples
///
/// ```rust
/// use fixed_core::FixedArray;
///
/// let mut a: FixedArray<u16, 4> = FixedArray::filled(0);
/// a[1] = 7;
/// *a.at_mut(3) = 9;
/// assert_eq!(a, [0, 7, 0, 9]);
/// assert_eq!(a.try_at(4), Err(fixed_core::Error::OutOfBounds));
/// ```
#[repr(transparent)]
pub struct FixedArray<T: Copy, const N: usize> {
    pub(crate) buf: [T; N],
}

impl<T: Copy, const N: usize> FixedArray<T, N> {
    /// The fixed number of elements.
    pub const CAPACITY: usize = N;

    /// Returns the number of elements (always `N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the maximum number of elements (always `N`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns all elements as a shared slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns all elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Returns the underlying array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.buf
    }

    /// Returns the underlying array mutably.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.buf
    }

    /// Returns a raw pointer to the first element.
    ///
    /// For `N = 0` the pointer is dangling and must not be dereferenced.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Borrows the array as a read-only [`ArrayView`].
    #[inline]
    pub const fn as_view(&self) -> ArrayView<'_, T, N> {
        ArrayView::new(&self.buf)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Overwrites every element with `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.buf = [value; N];
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}
impl<T: Copy + Eq, const N: usize> Eq for FixedArray<T, N> {}

impl<T: Copy + PartialEq, const N: usize> PartialEq<[T; N]> for FixedArray<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.buf == *other
    }
}
impl<T: Copy + PartialEq, const N: usize> PartialEq<FixedArray<T, N>> for [T; N] {
    fn eq(&self, other: &FixedArray<T, N>) -> bool {
        *self == other.buf
    }
}
impl<'a, T: Copy + PartialEq, const N: usize> PartialEq<ArrayView<'a, T, N>> for FixedArray<T, N> {
    fn eq(&self, other: &ArrayView<'a, T, N>) -> bool {
        self.buf == *other.as_array()
    }
}

impl<T: Copy + Hash, const N: usize> Hash for FixedArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for FixedArray<T, N> {}
impl<T: Copy, const N: usize> Clone for FixedArray<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}
impl<T: Copy, const N: usize> DerefMut for FixedArray<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<T: Copy, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.buf
    }
}
impl<T: Copy, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}
impl<T: Copy, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    fn borrow(&self) -> &[T] {
        &self.buf
    }
}
impl<T: Copy, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedArray;
    use proptest::prelude::*;

    #[test]
    fn test_size_and_capacity() {
        let a: FixedArray<i32, 4> = FixedArray::default();
        assert_eq!(a.size(), 4);
        assert_eq!(a.max_size(), 4);
        assert!(!a.is_empty());
        assert_eq!(FixedArray::<i32, 4>::CAPACITY, 4);
        assert_eq!(a.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_layout_is_plain_array() {
        use core::mem::{align_of, size_of};
        assert_eq!(size_of::<FixedArray<u32, 5>>(), size_of::<[u32; 5]>());
        assert_eq!(align_of::<FixedArray<u64, 3>>(), align_of::<[u64; 3]>());
        assert_eq!(size_of::<FixedArray<u8, 0>>(), 0);
    }

    #[test]
    fn zero_size_array_behaves() {
        let mut a: FixedArray<u8, 0> = FixedArray::default();
        assert_eq!(a.size(), 0);
        assert!(a.is_empty());
        assert_eq!(a.iter().count(), 0);
        assert_eq!(a.iter_mut().count(), 0);
        assert_eq!(a.into_iter().count(), 0);
        assert_eq!(a.get(0), None);
        assert_eq!(a.try_at(0), Err(crate::Error::OutOfBounds));
        assert_eq!(a, FixedArray::<u8, 0>::default());
    }

    #[test]
    fn test_equality_is_element_wise() {
        let a: FixedArray<i32, 3> = [1, 2, 3].into();
        let mut b = a;
        assert_eq!(a, b);
        b[2] = 4;
        assert_ne!(a, b);

        // Comparison against the raw representation, both directions.
        assert_eq!(a, [1, 2, 3]);
        assert_eq!([1, 2, 3], a);
        assert_ne!([1, 2, 4], a);
        assert_eq!(a, a.as_view());
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut a: FixedArray<i32, 3> = [1, 2, 3].into();
        let s: &[i32] = &a;
        assert_eq!(s, &[1, 2, 3]);
        let smut: &mut [i32] = &mut a;
        smut[1] = 22;
        assert_eq!(a.as_slice(), &[1, 22, 3]);
        let amut: &mut [i32] = a.as_mut();
        amut[0] = 11;
        assert_eq!(a.as_ref(), &[11, 22, 3]);
        assert_eq!(a.first(), Some(&11));
    }

    #[test]
    fn test_borrow_and_borrow_mut_behave_like_slice() {
        use core::borrow::{Borrow, BorrowMut};

        let mut a: FixedArray<i32, 3> = [1, 2, 3].into();
        let b: &[i32] = Borrow::<[i32]>::borrow(&a);
        assert_eq!(b, a.as_slice());
        {
            let bm: &mut [i32] = BorrowMut::<[i32]>::borrow_mut(&mut a);
            bm[1] = 20;
        }
        assert_eq!(a, [1, 20, 3]);
    }

    #[test]
    fn test_as_ptr_matches_slice() {
        let mut a: FixedArray<u16, 4> = [10, 20, 30, 40].into();
        assert_eq!(a.as_ptr(), a.as_slice().as_ptr());
        let p = a.as_mut_ptr();
        assert_eq!(p, a.as_mut_slice().as_mut_ptr());
    }

    #[test]
    fn test_fill_and_hash() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let mut a: FixedArray<u8, 3> = FixedArray::default();
        a.fill(5);
        assert_eq!(a, [5, 5, 5]);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [5u8, 5, 5][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_debug_lists_elements() {
        use alloc::format;
        let a: FixedArray<i32, 2> = [1, 2].into();
        assert_eq!(format!("{a:?}"), "[1, 2]");
    }

    proptest! {
        #[test]
        fn index_write_then_read(values in proptest::array::uniform8(any::<i64>()), i in 0usize..8, x in any::<i64>()) {
            let mut a = FixedArray::new(values);
            a[i] = x;
            prop_assert_eq!(a[i], x);
            prop_assert_eq!(*a.at(i), x);
        }

        #[test]
        fn single_change_breaks_equality(values in proptest::array::uniform6(any::<u32>()), i in 0usize..6) {
            let a = FixedArray::new(values);
            let mut b = a;
            prop_assert_eq!(a, b);
            b[i] = b[i].wrapping_add(1);
            prop_assert_ne!(a, b);
        }
    }
}
