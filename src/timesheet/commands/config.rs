//! Config command: show one key, show all keys, or set a key.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::{TimesheetConfig, CONFIG_KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TimesheetConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => {
            let listing = CONFIG_KEYS
                .iter()
                .map(|key| Ok((key.to_string(), config.get(key)?)))
                .collect::<Result<Vec<_>>>()?;
            Ok(CmdResult::default().with_listing(listing))
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            Ok(CmdResult::default().with_listing(vec![(key, value)]))
        }
        ConfigAction::Set(key, value) => {
            if key == "default-client" {
                validate_client(&value)?;
            }
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let shown = config.get(&key)?;

            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{} = {}", key, shown)));
            Ok(result)
        }
    }
}

fn validate_client(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(());
    }
    super::backfill::resolve_code(trimmed).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_all_lists_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.listing.len(), CONFIG_KEYS.len());
        assert_eq!(result.listing[0], ("default-client".to_string(), "none".to_string()));
    }

    #[test]
    fn set_persists_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("default-client".into(), "tcg".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "default-client = TCG");

        let shown = run(dir.path(), ConfigAction::ShowKey("default-client".into())).unwrap();
        assert_eq!(shown.listing[0].1, "TCG");
    }

    #[test]
    fn set_rejects_invalid_client() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            dir.path(),
            ConfigAction::Set("default-client".into(), "two words".into()),
        );
        assert!(err.is_err());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("colour".into())).is_err());
    }
}
