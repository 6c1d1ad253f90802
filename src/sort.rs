use crate::arena::Arena;
use crate::array::swap_at;
use crate::error::ArenaError;

/// Which run supplies the next element when the merge heads compare equal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The left element is taken only when strictly less than the right one,
    /// so equal elements from the right run come first (not stable)
    #[default]
    RightFirst,
    /// The left element is taken unless the right one is strictly less (stable)
    LeftFirst,
}

impl TieBreak {
    fn take_left<T: PartialOrd>(self, left: &T, right: &T) -> bool {
        match self {
            TieBreak::RightFirst => left < right,
            TieBreak::LeftFirst => !(right < left),
        }
    }
}

/// Scratch units `sort_in` needs from its arena for a sequence of length `n`
///
/// Merges run one at a time and release their scratch before returning, so
/// the peak is a single top-level merge.
pub fn scratch_len(n: usize) -> usize {
    if n > 3 { n } else { 0 }
}

/// Sort ascending in place with an internally sized scratch arena
pub fn sort<T: Copy + Default + PartialOrd>(seq: &mut [T]) {
    sort_owned(seq, TieBreak::RightFirst);
}

/// Stable variant of [`sort`]
pub fn sort_stable<T: Copy + Default + PartialOrd>(seq: &mut [T]) {
    sort_owned(seq, TieBreak::LeftFirst);
}

/// Sort ascending in place, taking merge scratch from `arena`
///
/// Fails with [`ArenaError::OutOfCapacity`] if the arena has fewer than
/// [`scratch_len`] units remaining; `seq` may then be partially sorted.
/// The arena's `used` offset is the same after the call as before it.
pub fn sort_in<T: Copy + PartialOrd>(arena: &mut Arena<T>, seq: &mut [T]) -> Result<(), ArenaError> {
    sort_with(arena, seq, TieBreak::RightFirst)
}

/// Stable variant of [`sort_in`]
pub fn sort_stable_in<T: Copy + PartialOrd>(arena: &mut Arena<T>, seq: &mut [T]) -> Result<(), ArenaError> {
    sort_with(arena, seq, TieBreak::LeftFirst)
}

/// Merge sort with an explicit tie-break
pub fn sort_with<T: Copy + PartialOrd>(
    arena: &mut Arena<T>,
    seq: &mut [T],
    ties: TieBreak,
) -> Result<(), ArenaError> {
    let n = seq.len();
    match n {
        0 | 1 => {}
        2 => {
            if seq[1] < seq[0] {
                swap_at(seq, 0, 1);
            }
        }
        3 => {
            if seq[0] > seq[1] {
                swap_at(seq, 0, 1);
            }
            if seq[1] > seq[2] {
                swap_at(seq, 1, 2);
            }
            if seq[0] > seq[1] {
                swap_at(seq, 0, 1);
            }
        }
        _ => {
            let mid = n / 2;
            let (left, right) = seq.split_at_mut(mid);
            sort_with(arena, left, ties)?;
            sort_with(arena, right, ties)?;

            let mut temp = arena.temp();
            let scratch = temp.alloc_slice(n)?;
            merge(seq, mid, scratch, ties);
            seq.copy_from_slice(scratch);
            temp.end()?;
        }
    }
    Ok(())
}

fn sort_owned<T: Copy + Default + PartialOrd>(seq: &mut [T], ties: TieBreak) {
    let mut arena = Arena::with_capacity(scratch_len(seq.len()));
    if let Err(e) = sort_with(&mut arena, seq, ties) {
        unreachable!("scratch arena sized for {} elements: {}", seq.len(), e);
    }
}

/// Merge the sorted runs `seq[..mid]` and `seq[mid..]` into `out`
fn merge<T: Copy + PartialOrd>(seq: &[T], mid: usize, out: &mut [T], ties: TieBreak) {
    let n = seq.len();
    let (mut a, mut b) = (0, mid);
    for slot in out.iter_mut() {
        if b == n || (a < mid && ties.take_left(&seq[a], &seq[b])) {
            *slot = seq[a];
            a += 1;
        } else {
            *slot = seq[b];
            b += 1;
        }
    }
}
