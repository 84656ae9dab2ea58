//! Batch driver: raw multi-line text in, rewritten text out.

use crate::model::Rewrite;
use crate::rules::rewrite_line;

/// Rewrites every non-blank line of `raw`, preserving input order.
pub fn rewrite_all(raw: &str) -> Vec<Rewrite> {
    raw.lines().filter_map(rewrite_line).collect()
}

/// Joins entries one per line with a single trailing newline. Blank entries
/// are skipped; an empty result is the empty string.
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        let line = line.as_ref().trim_end();
        if line.trim().is_empty() {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Rewrites `raw` and renders the final text.
pub fn rewrite_text(raw: &str) -> String {
    join_lines(rewrite_all(raw).iter().map(|r| r.sentence.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_blank_lines_and_keeps_order() {
        let raw = "\n- weekly sync\n   \n\t\n- toner swap - NR\n";
        assert_eq!(
            rewrite_text(raw),
            "weekly sync.\nResponded to a printer issue; identified a device fault. Performed \
             remediation and confirmed functionality. – NR\n"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(rewrite_text(""), "");
        assert_eq!(rewrite_text("\n  \n - \n"), "");
    }

    #[test]
    fn join_skips_blank_entries() {
        assert_eq!(join_lines(["a", "", "  ", "b  "]), "a\nb\n");
    }

    #[test]
    fn handles_crlf_input() {
        assert_eq!(
            rewrite_text("patched server\r\nrebooted hub\r\n"),
            "patched server.\nrebooted hub.\n"
        );
    }
}
