//! Core data types: client codes, incident categories and per-line results.

use serde::Serialize;
use std::fmt;

/// Separator placed between a sentence and its client annotation (U+2013).
pub const ANNOTATION_SEPARATOR: &str = " – ";

/// Clients the rewriter knows how to tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientCode {
    Tcg,
    Nr,
    Kobold,
}

impl ClientCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientCode::Tcg => "TCG",
            ClientCode::Nr => "NR",
            ClientCode::Kobold => "KOBOLD",
        }
    }
}

impl fmt::Display for ClientCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incident categories, listed in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PrinterIssue,
    Onboarding,
    SlackReinstatement,
    EmailTrace,
    BackupRestore,
    Procurement,
    EquipmentIntake,
    PeripheralConnectivity,
    Uncategorized,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PrinterIssue => "printer-issue",
            Category::Onboarding => "onboarding",
            Category::SlackReinstatement => "slack-reinstatement",
            Category::EmailTrace => "email-trace",
            Category::BackupRestore => "backup-restore",
            Category::Procurement => "procurement",
            Category::EquipmentIntake => "equipment-intake",
            Category::PeripheralConnectivity => "peripheral-connectivity",
            Category::Uncategorized => "uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of rewriting a single log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    pub category: Category,
    pub client: Option<ClientCode>,
    /// Line text with bullets and the client suffix removed.
    pub body: String,
    pub sentence: String,
}

/// Appends ` – CODE` to `sentence` when a client is present.
pub fn annotate(sentence: String, client: Option<ClientCode>) -> String {
    match client {
        Some(code) => format!("{}{}{}", sentence, ANNOTATION_SEPARATOR, code),
        None => sentence,
    }
}
