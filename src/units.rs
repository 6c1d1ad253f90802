//! Size helpers for sizing arenas

use crate::error::{Result, StackError};

pub const fn kilobytes(n: usize) -> usize {
    n * 1024
}

pub const fn megabytes(n: usize) -> usize {
    kilobytes(n) * 1024
}

pub const fn gigabytes(n: usize) -> usize {
    megabytes(n) * 1024
}

/// Only meaningful on 64-bit targets
pub const fn terabytes(n: usize) -> usize {
    gigabytes(n) * 1024
}

/// Parse a capacity like "4096", "64k", "2M" or "1g"
///
/// Suffixes are binary multiples and case-insensitive.
pub fn parse_capacity(s: &str) -> Result<usize> {
    let invalid = || StackError::InvalidCapacity(s.to_string());
    let trimmed = s.trim();

    let (digits, scale) = match trimmed.char_indices().last() {
        Some((i, c)) if c.is_ascii_alphabetic() => {
            let scale = match c.to_ascii_lowercase() {
                'k' => kilobytes(1),
                'm' => megabytes(1),
                'g' => gigabytes(1),
                't' => terabytes(1),
                _ => return Err(invalid()),
            };
            (&trimmed[..i], scale)
        }
        Some(_) => (trimmed, 1),
        None => return Err(invalid()),
    };

    let value: usize = digits.parse().map_err(|_| invalid())?;
    value.checked_mul(scale).ok_or_else(invalid)
}
