use std::io::{self, Write};

use stackarena::{Arena, scratch_len};

/// Report how a sort used its arena
///
/// One `key: value` line per statistic, prefixed with the program name so
/// the lines stand apart from sorted output when both go to a terminal.
pub fn debug_arena<W: Write, T: Copy>(writer: &mut W, arena: &Arena<T>, len: usize) -> io::Result<()> {
    writeln!(writer, "stackarena: values: {}", len)?;
    writeln!(writer, "stackarena: capacity: {}", arena.capacity())?;
    writeln!(writer, "stackarena: scratch needed: {}", scratch_len(len))?;
    writeln!(writer, "stackarena: peak used: {}", arena.peak())?;
    writeln!(writer, "stackarena: used after sort: {}", arena.used())?;
    Ok(())
}
