//! Default-client backfill for already rewritten text.

use crate::batch::join_lines;
use crate::client::strip_client_suffix;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TimesheetError};
use crate::model::{ClientCode, ANNOTATION_SEPARATOR};
use once_cell::sync::Lazy;
use regex::Regex;

static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" – [A-Z][A-Z0-9_]*$").expect("annotation pattern is valid"));

static CODE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("code pattern is valid"));

/// Upper-cases `requested` and resolves aliases (`kb` becomes `KOBOLD`).
/// Codes outside the known set are kept if they form a single token.
pub fn resolve_code(requested: &str) -> Result<String> {
    if let Ok(code) = requested.parse::<ClientCode>() {
        return Ok(code.to_string());
    }
    let code = requested.trim().to_uppercase();
    if CODE_TOKEN.is_match(&code) {
        Ok(code)
    } else {
        Err(TimesheetError::Api(format!(
            "Invalid client code: {:?}",
            requested
        )))
    }
}

/// Whether `line` already ends with a client annotation.
pub fn is_annotated(line: &str) -> bool {
    let line = line.trim_end();
    ANNOTATION.is_match(line) || strip_client_suffix(line).len() != line.len()
}

/// Appends ` – {code}` to every non-blank line without an annotation.
/// Blank lines are dropped. `code` must already be resolved.
pub fn apply(text: &str, code: &str) -> String {
    join_lines(text.lines().map(|line| {
        let line = line.trim_end();
        if line.trim().is_empty() || is_annotated(line) {
            line.to_string()
        } else {
            format!("{}{}{}", line, ANNOTATION_SEPARATOR, code)
        }
    }))
}

pub fn run(text: &str, requested: &str) -> Result<CmdResult> {
    let code = resolve_code(requested)?;
    let missing = text
        .lines()
        .filter(|line| !line.trim().is_empty() && !is_annotated(line))
        .count();
    let output = apply(text, &code);
    tracing::info!(%code, tagged = missing, "backfill finished");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Tagged {} line(s) with {}.",
        missing, code
    )));
    Ok(result.with_output(output))
}
