use stackarena::TieBreak;
use stackarena::error::Result;
use stackarena::units::parse_capacity;

use crate::cli::Args;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub capacity: Option<usize>,
    pub tie_break: TieBreak,
    pub contains: Option<i64>,
    pub debug: bool,
    pub output_file: Option<String>,
    pub input_files: Vec<String>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let capacity = args.capacity.as_deref().map(parse_capacity).transpose()?;

        Ok(Config {
            capacity,
            tie_break: if args.stable {
                TieBreak::LeftFirst
            } else {
                TieBreak::RightFirst
            },
            contains: args.contains,
            debug: args.debug,
            output_file: args.output.clone(),
            input_files: args.files.clone(),
        })
    }

    /// Arena capacity to sort `len` values with
    pub fn arena_capacity(&self, len: usize) -> usize {
        self.capacity.unwrap_or_else(|| stackarena::scratch_len(len))
    }
}
