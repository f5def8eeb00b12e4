// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only borrowed view over `N` externally owned elements.
//!
//! An [`ArrayView`] is the non-owning counterpart of
//! [`FixedArray`](crate::FixedArray). It never copies or frees the memory it
//! points at; the borrow keeps that memory alive for as long as the view
//! exists. Views are built from data whose length is already known to be
//! `N`: an array reference, an owning `FixedArray`, or a length-checked
//! slice.

// Crate imports
use crate::{array::FixedArray, error::Error};

// Core imports
use core::{fmt, hash::Hash, ops::Deref};

/// A read-only view over exactly `N` elements owned elsewhere.
///
/// # Examples
///
/// ```rust
/// use fixed_core::ArrayView;
///
/// let pool = [3u8, 1, 4, 1, 5, 9];
/// let slot: ArrayView<'_, u8, 4> = ArrayView::from_prefix(&pool[2..]).unwrap();
/// assert_eq!(slot.as_slice(), &[4, 1, 5, 9]);
/// assert_eq!(*slot.back(), 9);
/// ```
pub struct ArrayView<'a, T: Copy, const N: usize> {
    data: &'a [T; N],
}

impl<'a, T: Copy, const N: usize> ArrayView<'a, T, N> {
    const NON_EMPTY: () = assert!(N > 0, "front/back require a non-empty ArrayView");

    /// Views an existing array.
    #[inline]
    pub const fn new(data: &'a [T; N]) -> Self {
        Self { data }
    }

    /// Views the first `N` elements of `src`.
    ///
    /// Returns [`Error::LengthMismatch`] if `src` is shorter than `N`.
    #[inline]
    pub fn from_prefix(src: &'a [T]) -> Result<Self, Error> {
        match src.first_chunk::<N>() {
            Some(data) => Ok(Self { data }),
            None => Err(Error::LengthMismatch {
                expected: N,
                found: src.len(),
            }),
        }
    }

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

    /// Returns the viewed elements as a slice with the view's lifetime.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the viewed array with the view's lifetime.
    #[inline]
    pub const fn as_array(&self) -> &'a [T; N] {
        self.data
    }

    /// Returns a raw pointer to the first viewed element.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Iterates over the viewed elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Returns the element at `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= N`.
    #[inline]
    #[track_caller]
    pub fn at(&self, n: usize) -> &'a T {
        assert!(n < N, "index {n} out of bounds for capacity {N}");
        &self.data[n]
    }

    /// Returns `Some(&T)` if `n < N`, otherwise `None`.
    #[inline]
    pub fn get(&self, n: usize) -> Option<&'a T> {
        self.data.get(n)
    }

    /// Validating variant of [`at`](Self::at).
    #[inline]
    pub fn try_at(&self, n: usize) -> Result<&'a T, Error> {
        self.data.get(n).ok_or(Error::OutOfBounds)
    }

    /// Returns the first element. Does not compile for `N = 0`.
    #[inline]
    pub fn front(&self) -> &'a T {
        let () = Self::NON_EMPTY;
        &self.data[0]
    }

    /// Returns the last element. Does not compile for `N = 0`.
    #[inline]
    pub fn back(&self) -> &'a T {
        let () = Self::NON_EMPTY;
        &self.data[N - 1]
    }

    /// Copies all `N` elements into `dst`.
    #[inline]
    pub fn copy_to(&self, dst: &mut [T; N]) {
        dst.copy_from_slice(self.data);
    }

    /// Copies the viewed elements into an owning [`FixedArray`].
    #[inline]
    pub fn to_fixed_array(&self) -> FixedArray<T, N> {
        FixedArray::new(*self.data)
    }
}

impl<T: Copy, const N: usize> Copy for ArrayView<'_, T, N> {}
impl<T: Copy, const N: usize> Clone for ArrayView<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for ArrayView<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Copy, const N: usize> Deref for ArrayView<'_, T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.data
    }
}

impl<T: Copy, const N: usize> AsRef<[T]> for ArrayView<'_, T, N> {
    fn as_ref(&self) -> &[T] {
        self.data
    }
}

impl<'a, T: Copy, const N: usize> From<&'a [T; N]> for ArrayView<'a, T, N> {
    fn from(data: &'a [T; N]) -> Self {
        Self { data }
    }
}

impl<'a, T: Copy, const N: usize> From<&'a FixedArray<T, N>> for ArrayView<'a, T, N> {
    fn from(array: &'a FixedArray<T, N>) -> Self {
        Self { data: &array.buf }
    }
}

impl<'a, T: Copy, const N: usize> TryFrom<&'a [T]> for ArrayView<'a, T, N> {
    type Error = Error;

    /// Views a slice of exactly `N` elements.
    fn try_from(src: &'a [T]) -> Result<Self, Self::Error> {
        let data: &'a [T; N] = src.try_into().map_err(|_| Error::LengthMismatch {
            expected: N,
            found: src.len(),
        })?;
        Ok(Self { data })
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for ArrayView<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
impl<T: Copy + Eq, const N: usize> Eq for ArrayView<'_, T, N> {}

impl<T: Copy + PartialEq, const N: usize> PartialEq<FixedArray<T, N>> for ArrayView<'_, T, N> {
    fn eq(&self, other: &FixedArray<T, N>) -> bool {
        *self.data == other.buf
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq<[T; N]> for ArrayView<'_, T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data == other
    }
}

impl<T: Copy + Hash, const N: usize> Hash for ArrayView<'_, T, N> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}
