mod cli;
mod config;
mod debug;
mod input;
mod output;

use std::fs::File;
use std::io::{self, Write};

use clap::Parser;
use stackarena::Arena;
use stackarena::array::contains;
use stackarena::error::Result;

use cli::Args;
use config::Config;

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("stackarena: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;

    // Read values from files or stdin
    let mut values = if config.input_files.is_empty() {
        input::read_values(io::stdin().lock())?
    } else {
        let mut all_values = Vec::new();
        for path in &config.input_files {
            let mut file_values = if path == "-" {
                input::read_values(io::stdin().lock())?
            } else {
                input::read_values(File::open(path)?)?
            };
            all_values.append(&mut file_values);
        }
        all_values
    };

    if let Some(needle) = config.contains {
        let out = output::open_output(&config)?;
        output::write_membership(out, contains(needle, &values))?;
        return Ok(());
    }

    let mut arena: Arena<i64> = Arena::try_with_capacity(config.arena_capacity(values.len()))?;
    stackarena::sort_with(&mut arena, &mut values, config.tie_break)?;

    if config.debug {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        debug::debug_arena(&mut stderr, &arena, values.len())?;
        stderr.flush()?;
    }

    let out = output::open_output(&config)?;
    output::write_values(out, &values)?;

    Ok(())
}
