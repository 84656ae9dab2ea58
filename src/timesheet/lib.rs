//! # Timesheet Architecture
//!
//! Timesheet turns terse activity-log bullets ("- printer jammed, toner
//! everywhere - TCG") into client-facing sentences for a timesheet or status
//! report. Like any good CLI tool it is a library first: the binary is one
//! client of the API below.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, picks input/output, renders results    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves overrides against the loaded config             │
//! │  - Owns the remote backend slot and its fallback policy     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - rewrite, classify, backfill, clients, config             │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (normalize, client, rules, extract, batch)          │
//! │  - Pure functions over strings, no I/O, no state            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Engine
//!
//! Each raw line goes through the same pipeline:
//!
//! 1. [`normalize`] strips bullets, detects the client code on the trimmed
//!    line and removes a trailing `- CODE` suffix to get the *body*.
//! 2. [`rules`] walks an ordered table of category rules and renders the
//!    first match's template, filling names via [`extract`].
//! 3. [`model::annotate`] appends ` – CODE` when a client was detected.
//!
//! [`batch`] applies this to every line, drops blanks and joins the result.
//!
//! ## Collaborators
//!
//! Everything with side effects sits behind a narrow interface so the engine
//! stays testable on its own:
//! - [`backend`]: the `RewriteBackend` trait and its OpenAI-compatible
//!   implementation
//! - [`io`]: file, stdin and clipboard input; file and clipboard output
//! - [`clipboard`]: OS clipboard tools
//! - [`config`]: `config.json` settings
//! - [`error`]: error types

pub mod api;
pub mod backend;
pub mod batch;
pub mod client;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod io;
pub mod model;
pub mod normalize;
pub mod rules;

pub use batch::rewrite_text;
pub use rules::rewrite_line;
