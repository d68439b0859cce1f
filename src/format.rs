//! Flat display strings for editor consumption.
//!
//! The host editor renders these verbatim: pipe-delimited lines for buffers
//! and comma-joined `{"abbr", "menu"}` records for popup completion.

use crate::models::{Comment, Issue};

pub fn issue_line(issue: &Issue) -> String {
    format!("{} | {}", issue.key, issue.fields.summary)
}

/// Completion-menu records, one per issue, joined by commas. Embedded double
/// quotes in the summary are backslash-escaped so the record stays parseable
/// by the editor's menu code.
pub fn completion_menu(issues: &[Issue]) -> String {
    let records: Vec<String> = issues
        .iter()
        .map(|issue| {
            format!(
                "{{\"abbr\": \"{}\", \"menu\": \"{}\"}}",
                issue.key,
                escape_quotes(&issue.fields.summary)
            )
        })
        .collect();
    records.join(",")
}

/// One line per comment, in tracker order, each terminated by a newline.
/// Zero comments produce an empty string.
pub fn comment_block(comments: &[Comment]) -> String {
    let mut out = String::new();
    for comment in comments {
        out.push_str(&comment_line(comment));
        out.push('\n');
    }
    out
}

fn comment_line(comment: &Comment) -> String {
    // The timestamp is displayed as-is: first 10 chars are the date, chars
    // 11..16 the hour and minute. Slices that would split a UTF-8 boundary
    // fall back rather than panic.
    let date = comment.updated.get(0..10).unwrap_or(&comment.updated);
    let time = comment.updated.get(11..16).unwrap_or("");
    format!(
        "{} | {} @ {} | {}",
        comment.author.display_name, date, time, comment.body
    )
}

fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}
