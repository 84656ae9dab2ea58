//! # Command Layer
//!
//! Pure business logic for each user-facing operation. Commands take plain
//! Rust values (raw text, options, a config directory) and return a
//! [`CmdResult`]; they never print, prompt, or exit. Rendering the result is
//! the CLI's job.

use crate::model::Rewrite;

pub mod backfill;
pub mod classify;
pub mod clients;
pub mod config;
pub mod rewrite;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Final text, one entry per line, ready for stdout, a file or the clipboard.
    pub output: Option<String>,
    /// Per-line results from the rule engine.
    pub rewrites: Vec<Rewrite>,
    /// `(key, value)` rows for listings such as config or known clients.
    pub listing: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_rewrites(mut self, rewrites: Vec<Rewrite>) -> Self {
        self.rewrites = rewrites;
        self
    }

    pub fn with_listing(mut self, listing: Vec<(String, String)>) -> Self {
        self.listing = listing;
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
