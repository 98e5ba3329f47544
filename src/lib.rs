//! # twinrun - Two Threads, One Task
//!
//! A small launcher that runs a fixed worker task on two concurrent OS
//! threads and blocks until both have finished.
//!
//! ## Features
//!
//! - **Direct thread mapping**: plain `std::thread` spawn/join, no pool,
//!   no queue, no coordination beyond the final join
//! - **Clean stdout**: the worker lines are the only thing written to
//!   standard output; diagnostics go to stderr via `tracing`
//! - **Testable**: the launcher is generic over its output sink, so the
//!   two-lines-then-return contract is checked without touching stdout
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the launcher once
//! twinrun run
//!
//! # Same, with spawn/join diagnostics on stderr
//! twinrun -vv run
//! ```

pub mod cli;
pub mod launcher;
pub mod worker;

pub use cli::{Cli, Output};
pub use launcher::launch;

/// Result type alias for twinrun operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
