//! Run command implementation
//!
//! Invokes the launcher once: both worker threads are spawned, each
//! prints its line to stdout, and the command returns only after both
//! have been joined.

use anyhow::Result;

use crate::cli::Output;
use crate::launcher;

/// Execute the run command
pub fn execute(output: &Output) -> Result<()> {
    output.verbose(&format!(
        "launching {} worker threads",
        launcher::WORKER_COUNT
    ));

    launcher::launch()?;

    output.verbose("all worker threads joined");
    Ok(())
}
