//! Rewrite command: rule engine output, optionally replaced by a remote
//! backend's reply, optionally backfilled with a default client.
//!
//! The local result is always computed first. A remote backend only replaces
//! it when the call succeeds and returns at least one line; any failure is
//! logged, surfaced as a warning message, and the local text is used.

use crate::backend::RewriteBackend;
use crate::batch::{join_lines, rewrite_all};
use crate::commands::{backfill, CmdMessage, CmdResult};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Client appended to lines that carry none.
    pub default_client: Option<String>,
    /// Instructions for a remote backend.
    pub style: String,
}

/// Rewrites with the rule engine only.
pub fn run(raw: &str, options: &RewriteOptions) -> Result<CmdResult> {
    run_with(None, raw, options)
}

/// Rewrites with `remote` when given, falling back to the rule engine.
pub fn run_with(
    remote: Option<&dyn RewriteBackend>,
    raw: &str,
    options: &RewriteOptions,
) -> Result<CmdResult> {
    let default_code = options
        .default_client
        .as_deref()
        .map(backfill::resolve_code)
        .transpose()?;

    let rewrites = rewrite_all(raw);
    let local = join_lines(rewrites.iter().map(|r| r.sentence.as_str()));
    let mut result = CmdResult::default();

    let mut output = match remote {
        Some(backend) if !rewrites.is_empty() => {
            match remote_rewrite(backend, raw, &options.style) {
                Ok(text) => {
                    result.add_message(CmdMessage::info(format!(
                        "Rewritten by {}.",
                        backend.name()
                    )));
                    text
                }
                Err(e) => {
                    tracing::warn!(
                        backend = backend.name(),
                        error = %e,
                        "remote rewrite failed, using local rules"
                    );
                    result.add_message(CmdMessage::warning(format!(
                        "Remote rewrite failed ({}); used local rules instead.",
                        e
                    )));
                    local
                }
            }
        }
        _ => local,
    };

    if let Some(code) = &default_code {
        output = backfill::apply(&output, code);
    }

    if rewrites.is_empty() {
        result.add_message(CmdMessage::info("No log lines found."));
    }
    tracing::info!(lines = rewrites.len(), "rewrite finished");

    Ok(result.with_output(output).with_rewrites(rewrites))
}

fn remote_rewrite(backend: &dyn RewriteBackend, raw: &str, style: &str) -> Result<String> {
    let reply = backend.rewrite(raw, style)?;
    let shaped = join_lines(reply.lines().map(str::trim));
    if shaped.is_empty() {
        return Err(crate::error::TimesheetError::Llm(
            "reply contained no lines".to_string(),
        ));
    }
    Ok(shaped)
}
