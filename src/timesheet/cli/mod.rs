//! # CLI Layer
//!
//! One UI client for the timesheet library. It is the only place that:
//! - Parses arguments (clap)
//! - Touches stdout, stderr and the process exit code
//! - Installs a tracing subscriber
//! - Formats `CmdResult` values for a terminal
//!
//! Finished text goes to stdout and status messages to stderr, so
//! `timesheet notes.txt > week.txt` captures only the rewritten lines.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()` plus one `handle_*()` per subcommand
//! - `render`: `print_*()` output formatting
//! - `logging`: `--verbose` subscriber

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
