use colored::Colorize;
use timesheet::api::{CmdMessage, MessageLevel};
use timesheet::model::Rewrite;

const CATEGORY_WIDTH: usize = 22;
const CLIENT_WIDTH: usize = 7;

/// Status messages go to stderr so stdout stays pipeable.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_text(text: &str) {
    print!("{}", text);
}

pub(super) fn print_rewrites(rewrites: &[Rewrite]) {
    for (i, rewrite) in rewrites.iter().enumerate() {
        let client = rewrite.client.map(|c| c.as_str()).unwrap_or("-");
        println!(
            "{} {} {} {}",
            format!("{:>3}.", i + 1).dimmed(),
            format!("{:<width$}", rewrite.category.as_str(), width = CATEGORY_WIDTH).cyan(),
            format!("{:<width$}", client, width = CLIENT_WIDTH).yellow(),
            rewrite.body
        );
    }
}

pub(super) fn print_listing(rows: &[(String, String)], separator: &str) {
    for (left, right) in rows {
        println!("{} {} {}", left.bold(), separator, right);
    }
}
