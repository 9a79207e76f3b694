//! Console report for the `view-subscribers` tool.

use std::fmt::Write;

use crate::store::{JsonFileStore, StoreResult};

pub const NO_SUBSCRIBERS_FILE: &str = "No subscribers file found. No one has subscribed yet.";

/// The full console output for the file behind `store`.
/// A missing file is reported in the output, an unreadable or corrupt one is an error.
pub fn subscribers_report(store: &JsonFileStore, recent_len: usize) -> StoreResult<String> {
    let report = match store.read()? {
        Some(subscribers) => render_report(&subscribers, recent_len),
        None => format!("{NO_SUBSCRIBERS_FILE}\n"),
    };

    Ok(report)
}

/// Renders the total and the `recent_len` most recent subscribers, numbered from 1 in storage order.
pub fn render_report(subscribers: &[String], recent_len: usize) -> String {
    let total = subscribers.len();
    let mut out = String::new();

    // writing to a String can't fail
    let _ = writeln!(out, "\nTotal Subscribers: {total}\n");

    if total > 0 {
        let _ = writeln!(out, "Recent subscribers:");
        let recent = &subscribers[total.saturating_sub(recent_len)..];
        for (i, email) in recent.iter().enumerate() {
            let _ = writeln!(out, "{}. {email}", i + 1);
        }

        if total > recent_len {
            let _ = writeln!(out, "\n... and {} more", total - recent_len);
        }
    }

    out.push('\n');
    out
}
