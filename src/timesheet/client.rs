//! # Client-Code Detection
//!
//! Log lines are tagged with a short client abbreviation, usually as a trailing
//! `- TCG` style suffix, but the code may appear anywhere in the line. Detection
//! walks [`CLIENT_ALIASES`] in declaration order and returns the first code that
//! appears as a whole word, ignoring case. Aliases resolve to their canonical
//! code (`KB` is reported as `KOBOLD`).

use crate::error::{Result, TimesheetError};
use crate::model::ClientCode;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// Recognized spellings, in precedence order.
pub const CLIENT_ALIASES: &[(&str, ClientCode)] = &[
    ("TCG", ClientCode::Tcg),
    ("NR", ClientCode::Nr),
    ("KOBOLD", ClientCode::Kobold),
    ("KB", ClientCode::Kobold),
];

static CLIENT_PATTERNS: Lazy<Vec<(Regex, ClientCode)>> = Lazy::new(|| {
    CLIENT_ALIASES
        .iter()
        .map(|(alias, code)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(alias)))
                .expect("client alias pattern is valid");
            (re, *code)
        })
        .collect()
});

static CLIENT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    let alternation = CLIENT_ALIASES
        .iter()
        .map(|(alias, _)| regex::escape(alias))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\s*[-–—]\s*(?:{})\s*$", alternation))
        .expect("client suffix pattern is valid")
});

/// Returns the first client code mentioned in `text`, if any.
pub fn detect_client(text: &str) -> Option<ClientCode> {
    CLIENT_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, code)| *code)
}

/// Removes a trailing `- CODE`, `– CODE` or `— CODE` suffix naming a known client.
pub fn strip_client_suffix(text: &str) -> &str {
    match CLIENT_SUFFIX.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

impl FromStr for ClientCode {
    type Err = TimesheetError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        CLIENT_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(wanted))
            .map(|(_, code)| *code)
            .ok_or_else(|| TimesheetError::Api(format!("Unknown client code: {}", s)))
    }
}
