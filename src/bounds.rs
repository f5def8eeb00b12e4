// This file is part of fixed-core.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mask, chunk and segment arithmetic for pool-slot addressing.
//!
//! Memory pools hand out slots inside power-of-two sized segments. These
//! helpers split an address into its segment base and offset, and check that
//! a value lies entirely inside a slot. They are pure functions over
//! addresses; nothing here dereferences a pointer.

// Core imports
use core::mem::size_of;

/// Returns a mask with the low `num_bits` bits set.
///
/// `num_bits >= usize::BITS` yields `usize::MAX`.
#[inline]
pub const fn bit_mask(num_bits: u32) -> usize {
    if num_bits >= usize::BITS {
        usize::MAX
    } else {
        (1usize << num_bits) - 1
    }
}

/// Returns a mask covering the low `num_bytes` bytes.
#[inline]
pub const fn byte_mask(num_bytes: usize) -> usize {
    if num_bytes >= size_of::<usize>() {
        usize::MAX
    } else {
        bit_mask((num_bytes as u32) << 3)
    }
}

/// Returns the mask covering a value of type `T`.
#[inline]
pub const fn type_mask<T>() -> usize {
    byte_mask(size_of::<T>())
}

/// Byte distance from `start` to `end`.
///
/// Wraps if `end` precedes `start`; callers pass a begin/end pair of the
/// same chunk.
#[inline]
pub fn chunk_size<T>(start: *const T, end: *const T) -> usize {
    (end as usize).wrapping_sub(start as usize)
}

/// Byte size of the memory covered by `chunk`.
#[inline]
pub fn slice_chunk_size<T>(chunk: &[T]) -> usize {
    let range = chunk.as_ptr_range();
    chunk_size(range.start, range.end)
}

/// Returns `true` if `[value_addr, value_addr + value_len)` lies inside
/// `[slot_addr, slot_addr + slot_len)`.
///
/// Ranges that overflow the address space are never inside.
#[inline]
pub const fn check_bounds(
    value_addr: usize,
    value_len: usize,
    slot_addr: usize,
    slot_len: usize,
) -> bool {
    let (value_end, v_overflow) = value_addr.overflowing_add(value_len);
    let (slot_end, s_overflow) = slot_addr.overflowing_add(slot_len);
    !v_overflow && !s_overflow && value_addr >= slot_addr && value_end <= slot_end
}

/// Slice form of [`check_bounds`].
#[inline]
pub fn check_slice_bounds<T, U>(value: &[T], slot: &[U]) -> bool {
    check_bounds(
        value.as_ptr() as usize,
        slice_chunk_size(value),
        slot.as_ptr() as usize,
        slice_chunk_size(slot),
    )
}

#[inline]
#[track_caller]
fn assert_segment_size(segment_size: usize) {
    assert!(
        segment_size.is_power_of_two(),
        "segment size {segment_size} is not a power of two"
    );
}

/// Base address of the segment containing `ptr`.
///
/// # Panics
///
/// Panics if `segment_size` is not a non-zero power of two.
#[inline]
#[track_caller]
pub fn compute_segment<T>(ptr: *const T, segment_size: usize) -> usize {
    assert_segment_size(segment_size);
    (ptr as usize) & !(segment_size - 1)
}

/// Offset of `ptr` inside its segment.
///
/// # Panics
///
/// Panics if `segment_size` is not a non-zero power of two.
#[inline]
#[track_caller]
pub fn compute_offset<T>(ptr: *const T, segment_size: usize) -> usize {
    assert_segment_size(segment_size);
    (ptr as usize) & (segment_size - 1)
}

/// An address split into segment base and in-segment offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentAddr {
    /// Segment base address (aligned to the segment size).
    pub segment: usize,
    /// Byte offset within the segment.
    pub offset: usize,
}

impl SegmentAddr {
    /// Splits `ptr` for a pool whose segments are `segment_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `segment_size` is not a non-zero power of two.
    #[inline]
    #[track_caller]
    pub fn split<T>(ptr: *const T, segment_size: usize) -> Self {
        Self {
            segment: compute_segment(ptr, segment_size),
            offset: compute_offset(ptr, segment_size),
        }
    }

    /// Recombines segment and offset into the original address.
    #[inline]
    pub const fn join(self) -> usize {
        self.segment | self.offset
    }
}
