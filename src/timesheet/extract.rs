//! Entity extraction for rule templates.
//!
//! Names are runs of capitalized words (`Jane`, `Jane Smith`). Lowercase,
//! hyphenated or otherwise punctuated names are not recognized; callers fall
//! back to a generic filler when nothing matches.

use once_cell::sync::Lazy;
use regex::Regex;

const NAME: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*";

static FOR_OR_WITH_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?:for|with)\s+({})", NAME)).expect("name pattern is valid")
});

static FOR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"for\s+({})", NAME)).expect("name pattern is valid"));

static FOR_RECIPIENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for\s+([A-Z][a-z]+.*)").expect("recipient pattern is valid"));

static HELPED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i:help(?:ed)?)\s+([A-Z][a-z]+)").expect("help pattern is valid"));

static AND_UPDATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"and updated.*").expect("clause pattern is valid"));

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Name following "for" or "with".
pub fn name_after_for_or_with(body: &str) -> Option<&str> {
    first_capture(&FOR_OR_WITH_NAME, body)
}

/// Name following "for".
pub fn name_after_for(body: &str) -> Option<&str> {
    first_capture(&FOR_NAME, body)
}

/// Single name following "help" or "helped". The verb may be in any case.
pub fn name_after_help(body: &str) -> Option<&str> {
    first_capture(&HELPED_NAME, body)
}

/// Everything after "for", starting at a capitalized word, cut at an
/// "and updated ..." clause.
pub fn recipient_after_for(body: &str) -> Option<String> {
    let tail = first_capture(&FOR_RECIPIENT, body)?;
    let cut = AND_UPDATED.replace(tail, "");
    let recipient = cut.trim_matches(|c: char| c == ',' || c == ' ');
    let recipient =
        recipient.trim_end_matches(|c: char| matches!(c, ',' | ';' | '.') || c.is_whitespace());
    if recipient.is_empty() {
        None
    } else {
        Some(recipient.to_string())
    }
}
