use std::fs::File;
use std::io::{self, BufWriter, Write};

use stackarena::array::write_sequence;

use crate::config::Config;

/// Write values as one space-separated line
pub fn write_values<W: Write>(writer: W, values: &[i64]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    write_sequence(&mut writer, values)?;
    writer.flush()
}

/// Write the answer to a membership query
pub fn write_membership<W: Write>(mut writer: W, found: bool) -> io::Result<()> {
    writeln!(writer, "{}", found)?;
    writer.flush()
}

/// Open output file or return stdout
pub fn open_output(config: &Config) -> io::Result<Box<dyn Write>> {
    match &config.output_file {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_values() {
        let mut output = Vec::new();
        write_values(&mut output, &[1, 2, 3]).unwrap();
        assert_eq!(output, b"1 2 3\n");
    }

    #[test]
    fn test_write_no_values() {
        let mut output = Vec::new();
        write_values(&mut output, &[]).unwrap();
        assert_eq!(output, b"\n");
    }

    #[test]
    fn test_write_membership() {
        let mut output = Vec::new();
        write_membership(&mut output, true).unwrap();
        write_membership(&mut output, false).unwrap();
        assert_eq!(output, b"true\nfalse\n");
    }
}
