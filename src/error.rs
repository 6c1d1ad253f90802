use thiserror::Error;

/// Contract violations reported by [`Arena`](crate::arena::Arena) and its markers
///
/// Every variant leaves the arena exactly as it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("arena out of capacity: requested {requested} units with {used} of {capacity} used")]
    OutOfCapacity {
        requested: usize,
        used: usize,
        capacity: usize,
    },

    /// Ending a marker that is not the innermost open one, or whose
    /// checkpoint lies above the arena's current `used` offset
    #[error(
        "temporary marker invariant violated: checkpoint {saved} at depth {depth} \
         with {open} markers open, arena used {used}"
    )]
    MarkerInvariantViolation {
        saved: usize,
        used: usize,
        depth: usize,
        open: usize,
    },

    #[error("cannot allocate backing storage for {capacity} units")]
    BackingAllocation { capacity: usize },

    #[error("invalid alignment {0}: must be a non-zero power of two")]
    InvalidAlignment(usize),

    #[error("stale region: [{offset}, {offset}+{len}) lies beyond used offset {used}")]
    StaleRegion { offset: usize, len: usize, used: usize },
}

/// Errors surfaced by the command-line front end
#[derive(Error, Debug)]
pub enum StackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Arena(#[from] ArenaError),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
}

pub type Result<T> = std::result::Result<T, StackError>;
