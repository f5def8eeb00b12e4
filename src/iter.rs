// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedArray`](crate::FixedArray) and
//! [`ArrayView`](crate::ArrayView).
//!
//! - `FixedArray` by value yields all `N` elements through
//!   [`core::array::IntoIter`].
//! - `&FixedArray`, `&mut FixedArray` and `ArrayView` iterate as slices.

// Crate imports
use crate::{array::FixedArray, view::ArrayView};

impl<'a, T: Copy, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter_mut()
    }
}
impl<T: Copy, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for ArrayView<'a, T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T: Copy, const N: usize> IntoIterator for &ArrayView<'a, T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
