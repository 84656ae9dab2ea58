//! Line normalization: bullet stripping and client-suffix removal.

use crate::client::{detect_client, strip_client_suffix};
use crate::model::ClientCode;

const BULLET_MARKERS: &[char] = &['-', '*', '•', '–', '—'];

/// A log line ready for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine<'a> {
    /// The line with bullets and surrounding whitespace removed.
    pub trimmed: &'a str,
    /// `trimmed` without its trailing client suffix.
    pub body: &'a str,
    /// Client detected on `trimmed`, so a stripped suffix still counts.
    pub client: Option<ClientCode>,
}

/// Normalizes a raw line. Returns `None` when nothing but markers or
/// whitespace remains.
pub fn normalize_line(raw: &str) -> Option<NormalizedLine<'_>> {
    let trimmed = raw
        .trim_matches(|c: char| c.is_whitespace() || BULLET_MARKERS.contains(&c))
        .trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(NormalizedLine {
        trimmed,
        body: strip_client_suffix(trimmed),
        client: detect_client(trimmed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_marker_only_lines_have_no_content() {
        assert_eq!(normalize_line(""), None);
        assert_eq!(normalize_line("   \t "), None);
        assert_eq!(normalize_line(" - • "), None);
    }

    #[test]
    fn strips_bullets_and_whitespace() {
        let line = normalize_line("  • - reset password  ").unwrap();
        assert_eq!(line.trimmed, "reset password");
        assert_eq!(line.body, "reset password");
        assert_eq!(line.client, None);
    }

    #[test]
    fn suffix_is_removed_from_body_but_still_detected() {
        let line = normalize_line("- swapped toner - TCG").unwrap();
        assert_eq!(line.trimmed, "swapped toner - TCG");
        assert_eq!(line.body, "swapped toner");
        assert_eq!(line.client, Some(ClientCode::Tcg));
    }

    #[test]
    fn client_mentioned_mid_line_stays_in_body() {
        let line = normalize_line("* met NR staff about VPN").unwrap();
        assert_eq!(line.body, "met NR staff about VPN");
        assert_eq!(line.client, Some(ClientCode::Nr));
    }
}
