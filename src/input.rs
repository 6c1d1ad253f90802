use std::io::Read;

use bstr::ByteSlice;
use stackarena::error::{Result, StackError};

/// Parse whitespace-separated integers
pub fn parse_values(input: &[u8]) -> Result<Vec<i64>> {
    input
        .fields()
        .map(|field| {
            field
                .to_str()
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| StackError::InvalidNumber(field.to_str_lossy().into_owned()))
        })
        .collect()
}

/// Read all of `reader` and parse it into values
pub fn read_values<R: Read>(mut reader: R) -> Result<Vec<i64>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_values(&buf)
}
