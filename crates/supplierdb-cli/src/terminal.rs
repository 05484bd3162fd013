//! Terminal-side collaborators: notifications, the delete confirmation and
//! record rendering.

use std::io::{self, BufRead, Write};

use supplierdb_core::{ConfirmPrompt, NotificationSink, PhoneFormatter, Severity, SupplierRecord};

/// Prints notifications as single prefixed lines; errors go to stderr.
pub(crate) struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => println!("ok: {message}"),
            Severity::Warn => println!("warning: {message}"),
            Severity::Error => eprintln!("error: {message}"),
        }
    }
}

/// Asks on stdin; anything other than an explicit yes declines.
pub(crate) struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&self, question: &str) -> bool {
        print!("{question} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                tracing::warn!(error = %err, "could not read confirmation; treating as no");
                false
            }
        }
    }
}

/// `--yes` on the command line.
pub(crate) struct AssumeYes;

impl ConfirmPrompt for AssumeYes {
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_owned()
    }
}

/// One row per record: id, name, email, formatted phones, type, note.
pub(crate) fn render_table(records: &[SupplierRecord], formatter: &PhoneFormatter) -> String {
    let mut out = format!(
        "{:<8}{:<24}{:<28}{:<36}{:<14}NOTE\n",
        "ID", "NAME", "EMAIL", "PHONES", "TYPE"
    );
    for record in records {
        let supplier_type = record
            .supplier_type
            .map_or("\u{2014}", |t| t.as_str());
        out.push_str(&format!(
            "{:<8}{:<24}{:<28}{:<36}{:<14}{}\n",
            record.id.as_deref().unwrap_or("\u{2014}"),
            truncate(&record.name, 22),
            truncate(&record.email, 26),
            truncate(&formatter.format(&record.phone_numbers), 34),
            supplier_type,
            truncate(&record.note, 40),
        ));
    }
    out
}

pub(crate) fn render_record(record: &SupplierRecord, formatter: &PhoneFormatter) -> String {
    let mut out = format!(
        "Id:    {}\nName:  {}\nEmail: {}\nType:  {}\nPhones:\n",
        record.id.as_deref().unwrap_or("\u{2014}"),
        record.name,
        record.email,
        record
            .supplier_type
            .map_or("\u{2014}", |t| t.as_str()),
    );
    if record.phone_numbers.is_empty() {
        out.push_str("  \u{2014}\n");
    }
    for phone in &record.phone_numbers {
        out.push_str(&format!("  {}\n", formatter.format_one(phone)));
    }
    if !record.note.is_empty() {
        out.push_str(&format!("Note:  {}\n", record.note));
    }
    out
}
