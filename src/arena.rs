//! Linear arena over a fixed-capacity buffer
//!
//! Allocations are carved off the front of the buffer by advancing a single
//! `used` offset. There is no per-allocation free: memory comes back in bulk
//! through temporary markers (see [`crate::temp`]) or [`Arena::reset`].
//!
//! The arena is generic over its unit type, so a byte arena (`Arena<u8>`)
//! and a typed scratch arena (`Arena<i64>`) share one implementation and
//! sizes are always counted in units of `T`.

use std::fmt;
use std::ops::Range;

use crate::error::ArenaError;

/// Handle to a contiguous run of units inside an [`Arena`]
///
/// Regions are plain offsets; they do not borrow the arena. Access goes
/// through [`Arena::get`] and [`Arena::get_mut`], which reject regions that
/// were released by a marker or a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    offset: usize,
    len: usize,
}

impl Region {
    /// First unit of the region
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of units in the region
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last unit of the region
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Whether two regions share any unit
    pub fn overlaps(&self, other: &Region) -> bool {
        !self.is_empty() && !other.is_empty() && self.offset < other.end() && other.offset < self.end()
    }
}

/// Fixed-capacity linear allocator
pub struct Arena<T = u8> {
    /// Backing storage, never resized
    pub(crate) buf: Vec<T>,
    /// Units handed out so far
    pub(crate) used: usize,
    /// High-water mark of `used`
    pub(crate) peak: usize,
    /// Saved offsets of open temporary markers, oldest first
    pub(crate) markers: Vec<usize>,
}

impl<T: Copy + Default> Arena<T> {
    /// Create an arena that owns a default-initialized buffer of `capacity` units
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(vec![T::default(); capacity])
    }

    /// Like [`Arena::with_capacity`], but reports a buffer that cannot be
    /// allocated instead of aborting
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArenaError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| ArenaError::BackingAllocation { capacity })?;
        buf.resize(capacity, T::default());
        Ok(Self::from_vec(buf))
    }
}

impl<T: Copy> Arena<T> {
    /// Bind an arena to caller-supplied storage
    ///
    /// The capacity is the length of `buf`. Existing contents are left in
    /// place and are visible through fresh allocations until overwritten.
    pub fn from_vec(buf: Vec<T>) -> Self {
        Self {
            buf,
            used: 0,
            peak: 0,
            markers: Vec::new(),
        }
    }

    /// Give the backing storage back to the caller
    pub fn into_inner(self) -> Vec<T> {
        self.buf
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    /// Largest `used` value observed since creation
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Number of temporary markers that have been begun but not ended
    pub fn open_markers(&self) -> usize {
        self.markers.len()
    }

    /// Allocate `n` units at the current offset
    pub fn alloc(&mut self, n: usize) -> Result<Region, ArenaError> {
        self.alloc_aligned(n, 1)
    }

    /// Allocate `n` units starting at an offset that is a multiple of `align`
    ///
    /// Alignment is measured in units from the start of the buffer. Padding
    /// skipped to reach the aligned offset counts as used.
    pub fn alloc_aligned(&mut self, n: usize, align: usize) -> Result<Region, ArenaError> {
        if !align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment(align));
        }

        let start = self.used.next_multiple_of(align);
        let end = start
            .checked_add(n)
            .filter(|&end| end <= self.capacity())
            .ok_or(ArenaError::OutOfCapacity {
                requested: n,
                used: self.used,
                capacity: self.capacity(),
            })?;

        self.used = end;
        self.peak = self.peak.max(end);
        Ok(Region { offset: start, len: n })
    }

    /// Allocate `n` units and borrow them directly
    ///
    /// The slice holds whatever the buffer contained, which may be data
    /// from allocations released earlier.
    pub fn alloc_slice(&mut self, n: usize) -> Result<&mut [T], ArenaError> {
        let region = self.alloc(n)?;
        Ok(&mut self.buf[region.range()])
    }

    /// Allocate a single unit holding `value`
    pub fn push(&mut self, value: T) -> Result<Region, ArenaError> {
        let region = self.alloc(1)?;
        self.buf[region.offset] = value;
        Ok(region)
    }

    /// Allocate a copy of `values`
    pub fn push_slice(&mut self, values: &[T]) -> Result<Region, ArenaError> {
        let region = self.alloc(values.len())?;
        self.buf[region.range()].copy_from_slice(values);
        Ok(region)
    }

    pub fn get(&self, region: Region) -> Result<&[T], ArenaError> {
        self.check_live(region)?;
        Ok(&self.buf[region.range()])
    }

    pub fn get_mut(&mut self, region: Region) -> Result<&mut [T], ArenaError> {
        self.check_live(region)?;
        Ok(&mut self.buf[region.range()])
    }

    /// Release every allocation at once
    ///
    /// Open markers are not forgotten: ending one afterwards reports
    /// [`ArenaError::MarkerInvariantViolation`] if its checkpoint is now
    /// above `used`.
    pub fn reset(&mut self) {
        self.used = 0;
    }

    fn check_live(&self, region: Region) -> Result<(), ArenaError> {
        if region.end() > self.used {
            return Err(ArenaError::StaleRegion {
                offset: region.offset,
                len: region.len,
                used: self.used,
            });
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.buf.len())
            .field("used", &self.used)
            .field("peak", &self.peak)
            .field("open_markers", &self.markers.len())
            .finish()
    }
}
