// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedArray`](crate::FixedArray) and
//! [`ArrayView`](crate::ArrayView).
//!
//! Both accept every index form a slice accepts (`usize` and all range
//! types) and panic on out-of-bounds or inverted ranges, exactly like
//! built-in slices. Use `get`/`try_at` for the non-panicking shape.

// Crate imports
use crate::{array::FixedArray, view::ArrayView};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T: Copy, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedArray<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.buf[..][index]
    }
}

impl<T: Copy, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.buf[..][index]
    }
}

impl<T: Copy, I: SliceIndex<[T]>, const N: usize> Index<I> for ArrayView<'_, T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}
