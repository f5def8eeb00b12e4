// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::FixedArray, error::Error};

impl<T: Copy, const N: usize> FixedArray<T, N> {
    /// Wraps an existing array.
    #[inline]
    pub const fn new(buf: [T; N]) -> Self {
        Self { buf }
    }

    /// Constructs an array with every element set to `value`.
    #[inline]
    pub const fn filled(value: T) -> Self {
        Self { buf: [value; N] }
    }

    /// Unwraps into the underlying array.
    #[inline]
    pub const fn into_array(self) -> [T; N] {
        self.buf
    }

    /// Copies all `N` elements from `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &[T; N]) {
        self.buf.copy_from_slice(src);
    }

    /// Copies all `N` elements into `dst`.
    #[inline]
    pub fn copy_to(&self, dst: &mut [T; N]) {
        dst.copy_from_slice(&self.buf);
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self {
            buf: [T::default(); N],
        }
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(buf: [T; N]) -> Self {
        Self { buf }
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for FixedArray<T, N> {
    fn from(src: &[T; N]) -> Self {
        (*src).into()
    }
}

impl<T: Copy, const N: usize> From<FixedArray<T, N>> for [T; N] {
    fn from(a: FixedArray<T, N>) -> Self {
        a.buf
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = Error;

    /// Copies a slice of exactly `N` elements; any other length returns
    /// [`Error::LengthMismatch`].
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let buf: [T; N] = src.try_into().map_err(|_| Error::LengthMismatch {
            expected: N,
            found: src.len(),
        })?;
        Ok(Self { buf })
    }
}
