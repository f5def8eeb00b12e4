// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array::FixedArray,
    error::Error,
    text::{terminated_len, FixedStr},
};

impl<const N: usize> FixedStr<N> {
    /// Wraps a raw buffer as is. The text ends at the first `0`, or spans the
    /// whole buffer if there is none.
    #[inline]
    pub const fn from_raw(buf: [u8; N]) -> Self {
        Self {
            buf: FixedArray::new(buf),
        }
    }

    /// Replaces the contents with `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` is longer than [`capacity`](Self::capacity).
    #[inline]
    #[track_caller]
    pub fn set(&mut self, src: &str) {
        self.set_bytes(src.as_bytes())
    }

    /// Replaces the contents with `src`, up to its first `0` if any.
    ///
    /// # Panics
    ///
    /// Panics if the payload of `src` is longer than [`capacity`](Self::capacity).
    #[track_caller]
    pub fn set_bytes(&mut self, src: &[u8]) {
        let len = terminated_len(src);
        assert!(
            len < N,
            "text of length {len} does not fit in capacity {}",
            self.capacity()
        );
        self.write_terminated(&src[..len]);
    }

    /// Validating variant of [`set`](Self::set).
    ///
    /// On failure returns [`Error::Full`] and leaves the text unchanged.
    #[inline]
    pub fn try_set(&mut self, src: &str) -> Result<(), Error> {
        self.try_set_bytes(src.as_bytes())
    }

    /// Validating variant of [`set_bytes`](Self::set_bytes).
    pub fn try_set_bytes(&mut self, src: &[u8]) -> Result<(), Error> {
        let len = terminated_len(src);
        if len >= N {
            return Err(Error::Full);
        }
        self.write_terminated(&src[..len]);
        Ok(())
    }

    /// Copies a whole byte array of capacity `M <= N` into the front of the
    /// buffer, terminating at `M` when there is room.
    ///
    /// Does not compile if `M > N`.
    pub fn assign_array<const M: usize>(&mut self, src: &FixedArray<u8, M>) {
        let () = AssertFits::<M, N>::OK;
        let buf = self.buf.as_mut_slice();
        buf[..M].copy_from_slice(src.as_slice());
        if M < N {
            buf[M] = 0;
        }
    }

    fn write_terminated(&mut self, payload: &[u8]) {
        let buf = self.buf.as_mut_slice();
        buf[..payload.len()].copy_from_slice(payload);
        buf[payload.len()] = 0;
    }
}

struct AssertFits<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> AssertFits<M, N> {
    const OK: () = assert!(M <= N, "source array is larger than the text buffer");
}

impl<const N: usize> TryFrom<&str> for FixedStr<N> {
    type Error = Error;
    fn try_from(src: &str) -> Result<Self, Error> {
        let mut out = Self::new();
        out.try_set(src)?;
        Ok(out)
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedStr<N> {
    type Error = Error;
    fn try_from(src: &[u8]) -> Result<Self, Error> {
        let mut out = Self::new();
        out.try_set_bytes(src)?;
        Ok(out)
    }
}
