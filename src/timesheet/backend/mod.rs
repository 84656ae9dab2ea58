//! # Remote Rewrite Backends
//!
//! A backend turns raw log text into rewritten text, one entry per line. The
//! [`RewriteBackend`] trait keeps the rest of the crate independent of where
//! remote rewriting happens:
//!
//! - [`llm::LlmBackend`]: an OpenAI-compatible chat completion endpoint. May
//!   fail for any network or credential reason.
//! - [`scripted::ScriptedBackend`]: canned replies for tests.
//!
//! The rule engine is not a backend: the rewrite command always runs it first
//! and keeps its output as the fallback, so backends only report errors and never
//! recover from them.

use crate::error::Result;

pub mod llm;
#[cfg(any(test, feature = "test_utils"))]
pub mod scripted;

/// Text-in/text-out rewriting strategy.
pub trait RewriteBackend {
    /// Short name used in logs and messages.
    fn name(&self) -> &str;

    /// Rewrites `raw` following the `style` instructions.
    fn rewrite(&self, raw: &str, style: &str) -> Result<String>;
}
