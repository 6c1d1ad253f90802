//! Small helpers over primitive sequences

use std::fmt;
use std::io::{self, Write};

/// Linear membership test
pub fn contains<T: PartialEq>(value: T, seq: &[T]) -> bool {
    seq.iter().any(|x| *x == value)
}

/// Exchange two values through a temporary
pub fn swap<T: Copy>(a: &mut T, b: &mut T) {
    let tmp = *a;
    *a = *b;
    *b = tmp;
}

/// Exchange two elements of a sequence by index
///
/// `i == j` leaves the element unchanged.
pub fn swap_at<T: Copy>(seq: &mut [T], i: usize, j: usize) {
    if i == j {
        return;
    }
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = seq.split_at_mut(hi);
    swap(&mut head[lo], &mut tail[0]);
}

/// Displays a sequence as space-separated values
pub struct Spaced<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}

/// Write a sequence as one line of space-separated values
pub fn write_sequence<W: Write, T: fmt::Display>(writer: &mut W, seq: &[T]) -> io::Result<()> {
    writeln!(writer, "{}", Spaced(seq))
}

/// Print a sequence to stdout
pub fn print<T: fmt::Display>(seq: &[T]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    write_sequence(&mut stdout, seq)?;
    stdout.flush()
}
