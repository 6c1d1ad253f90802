//! Scoped temporary memory
//!
//! A [`Marker`] records the arena's `used` offset; ending it rewinds the
//! arena to that offset, releasing every allocation made in between.
//! Markers must be ended in reverse order of creation. The arena keeps a
//! stack of open checkpoints so an out-of-order end is rejected instead of
//! silently corrupting a sibling marker.
//!
//! [`TempMemory`] wraps the same protocol in a guard: it ends its marker
//! on drop, and nesting is ordered by the borrow checker.

use std::ops::{Deref, DerefMut};
use std::thread;

use thiserror::Error;

use crate::arena::Arena;
use crate::error::ArenaError;

/// Checkpoint of an arena's `used` offset
///
/// Consumed by [`Arena::end`]; a marker cannot be ended twice.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a marker that is never ended keeps its checkpoint open"]
pub struct Marker {
    depth: usize,
    saved: usize,
}

impl Marker {
    /// Arena offset captured when the marker was begun
    pub fn saved(&self) -> usize {
        self.saved
    }

    /// Number of markers that were already open when this one was begun
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// A rejected [`Arena::end`]
///
/// Carries the marker back so its checkpoint stays reachable: once the
/// markers opened after it are ended, it can be ended again.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{error}")]
pub struct EndError {
    marker: Marker,
    error: ArenaError,
}

impl EndError {
    pub fn error(&self) -> &ArenaError {
        &self.error
    }

    pub fn into_marker(self) -> Marker {
        self.marker
    }
}

impl From<EndError> for ArenaError {
    fn from(e: EndError) -> Self {
        e.error
    }
}

impl<T: Copy> Arena<T> {
    /// Open a checkpoint at the current offset
    pub fn begin(&mut self) -> Marker {
        let marker = Marker {
            depth: self.markers.len(),
            saved: self.used,
        };
        self.markers.push(self.used);
        marker
    }

    /// Rewind the arena to `marker`'s checkpoint
    ///
    /// Fails with [`ArenaError::MarkerInvariantViolation`] if a marker begun
    /// after this one is still open, or if the arena has already been
    /// rewound below the checkpoint. On failure nothing changes and the
    /// marker is handed back inside the error.
    pub fn end(&mut self, marker: Marker) -> Result<(), EndError> {
        let open = self.markers.len();
        let innermost = marker.depth + 1 == open && self.markers[marker.depth] == marker.saved;

        if !innermost || self.used < marker.saved {
            let error = ArenaError::MarkerInvariantViolation {
                saved: marker.saved,
                used: self.used,
                depth: marker.depth,
                open,
            };
            return Err(EndError { marker, error });
        }

        self.markers.pop();
        self.used = marker.saved;
        Ok(())
    }

    /// Open a checkpoint that is ended when the returned guard goes out of scope
    pub fn temp(&mut self) -> TempMemory<'_, T> {
        let marker = self.begin();
        TempMemory {
            arena: self,
            marker: Some(marker),
        }
    }
}

/// Guard over an arena with an open checkpoint
///
/// Dereferences to the arena, so allocations go through the guard. Dropping
/// the guard ends the checkpoint; a violation detected at that point panics.
/// Use [`TempMemory::end`] to observe the error instead.
pub struct TempMemory<'a, T: Copy> {
    arena: &'a mut Arena<T>,
    marker: Option<Marker>,
}

impl<T: Copy> TempMemory<'_, T> {
    /// End the checkpoint now and report any violation
    pub fn end(mut self) -> Result<(), EndError> {
        match self.marker.take() {
            Some(marker) => self.arena.end(marker),
            None => Ok(()),
        }
    }

    /// Arena offset this guard rewinds to
    pub fn saved(&self) -> usize {
        self.marker.as_ref().map_or(self.arena.used, Marker::saved)
    }
}

impl<T: Copy> Deref for TempMemory<'_, T> {
    type Target = Arena<T>;

    fn deref(&self) -> &Arena<T> {
        self.arena
    }
}

impl<T: Copy> DerefMut for TempMemory<'_, T> {
    fn deref_mut(&mut self) -> &mut Arena<T> {
        self.arena
    }
}

impl<T: Copy> Drop for TempMemory<'_, T> {
    fn drop(&mut self) {
        if let Some(marker) = self.marker.take() {
            if let Err(e) = self.arena.end(marker) {
                if !thread::panicking() {
                    panic!("{}", e);
                }
            }
        }
    }
}
