//! Version command implementation
//!
//! Displays version and build information about twinrun.

use anyhow::Result;

use crate::cli::Output;
use crate::{PKG_DESCRIPTION, PKG_NAME, VERSION};

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    output.header(&format!("{PKG_NAME} v{VERSION}"));

    output.table_row("Description:", PKG_DESCRIPTION);
    output.table_row("Rust edition:", "2024");
    output.table_row("Target:", std::env::consts::ARCH);
    output.table_row(
        "Profile:",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
    );

    output.success(&format!("Run '{PKG_NAME} --help' for usage information"));
    Ok(())
}
