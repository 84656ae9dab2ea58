//! Clients command: the alias table as `(alias, code)` rows.

use crate::client::CLIENT_ALIASES;
use crate::commands::CmdResult;
use crate::error::Result;

/// Lists recognized client spellings with the code each one reports.
pub fn run() -> Result<CmdResult> {
    let listing = CLIENT_ALIASES
        .iter()
        .map(|(alias, code)| (alias.to_string(), code.to_string()))
        .collect();
    Ok(CmdResult::default().with_listing(listing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_aliases_in_precedence_order() {
        let result = run().unwrap();
        let aliases: Vec<&str> = result.listing.iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(aliases, vec!["TCG", "NR", "KOBOLD", "KB"]);
        assert_eq!(result.listing[3].1, "KOBOLD");
    }
}
