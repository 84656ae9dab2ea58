//! Classify command: category and client per line, without rendering a timesheet.

use crate::batch::rewrite_all;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Runs the rule engine and reports the per-line category and client.
pub fn run(raw: &str) -> Result<CmdResult> {
    let rewrites = rewrite_all(raw);
    tracing::info!(lines = rewrites.len(), "classify finished");
    let mut result = CmdResult::default();
    if rewrites.is_empty() {
        result.add_message(CmdMessage::info("No log lines found."));
    }
    Ok(result.with_rewrites(rewrites))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ClientCode};

    #[test]
    fn reports_each_line_in_order() {
        let result = run("- toner low - TCG\n\n- onboarding for Ana\n- misc").unwrap();
        let cats: Vec<Category> = result.rewrites.iter().map(|r| r.category).collect();
        assert_eq!(
            cats,
            vec![Category::PrinterIssue, Category::Onboarding, Category::Uncategorized]
        );
        assert_eq!(result.rewrites[0].client, Some(ClientCode::Tcg));
        assert_eq!(result.rewrites[0].body, "toner low");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_input_gets_a_note() {
        let result = run("  \n").unwrap();
        assert!(result.rewrites.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
