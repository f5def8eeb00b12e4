// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::FixedArray, error::Error};

impl<T: Copy, const N: usize> FixedArray<T, N> {
    // Evaluated only when `front`/`back` are instantiated, so `N = 0` fails
    // to build instead of reading past the storage.
    const NON_EMPTY: () = assert!(N > 0, "front/back require a non-empty FixedArray");

    /// Returns the element at `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= N`.
    #[inline]
    #[track_caller]
    pub fn at(&self, n: usize) -> &T {
        assert!(n < N, "index {n} out of bounds for capacity {N}");
        &self.buf[n]
    }

    /// Returns the element at `n` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `n >= N`.
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, n: usize) -> &mut T {
        assert!(n < N, "index {n} out of bounds for capacity {N}");
        &mut self.buf[n]
    }

    /// Returns `Some(&T)` if `n < N`, otherwise `None`.
    #[inline]
    pub fn get(&self, n: usize) -> Option<&T> {
        self.buf.get(n)
    }

    /// Returns `Some(&mut T)` if `n < N`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, n: usize) -> Option<&mut T> {
        self.buf.get_mut(n)
    }

    /// Validating variant of [`at`](Self::at).
    #[inline]
    pub fn try_at(&self, n: usize) -> Result<&T, Error> {
        self.buf.get(n).ok_or(Error::OutOfBounds)
    }

    /// Validating variant of [`at_mut`](Self::at_mut).
    #[inline]
    pub fn try_at_mut(&mut self, n: usize) -> Result<&mut T, Error> {
        self.buf.get_mut(n).ok_or(Error::OutOfBounds)
    }

    /// Returns the first element. Does not compile for `N = 0`.
    #[inline]
    pub fn front(&self) -> &T {
        let () = Self::NON_EMPTY;
        &self.buf[0]
    }

    /// Returns the first element mutably. Does not compile for `N = 0`.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        let () = Self::NON_EMPTY;
        &mut self.buf[0]
    }

    /// Returns the last element. Does not compile for `N = 0`.
    #[inline]
    pub fn back(&self) -> &T {
        let () = Self::NON_EMPTY;
        &self.buf[N - 1]
    }

    /// Returns the last element mutably. Does not compile for `N = 0`.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        let () = Self::NON_EMPTY;
        &mut self.buf[N - 1]
    }
}
