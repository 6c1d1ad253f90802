//! Linear arena allocation with scoped temporary memory, plus an in-place
//! merge sort that draws its scratch space from an arena.

pub mod arena;
pub mod array;
pub mod error;
pub mod sort;
pub mod temp;
pub mod units;

pub use arena::{Arena, Region};
pub use error::ArenaError;
pub use sort::{TieBreak, scratch_len, sort, sort_in, sort_stable, sort_stable_in, sort_with};
pub use temp::{EndError, Marker, TempMemory};
