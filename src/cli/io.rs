//! JSON output for CLI
//!
//! One JSON object per line on stdout, UTF-8 only.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a value as a single JSON line to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let stdout = io::stdout();
    write_json_to(&mut stdout.lock(), value)
}

/// Write a value as a single JSON line to `writer`
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
