//! The worker task.
//!
//! One fixed unit of work: write a single known line to the output
//! sink. No input, no return value, no shared state with the other
//! worker.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

/// Fixed line every worker writes to the output stream.
pub const WORKER_MESSAGE: &str = "thread ran foo()";

/// Execute the worker task against `out`.
///
/// The line is emitted as a single `write_all` so that two workers
/// sharing a sink that is atomic per write call can never interleave
/// mid-line. Relative order between workers stays unspecified.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let line = format!("{WORKER_MESSAGE}\n");
    out.write_all(line.as_bytes())
        .context("failed to write worker message")?;
    debug!("worker task finished");
    Ok(())
}
