#![no_main]

//! Fuzz target for the display formatter.
//!
//! Tracker content is arbitrary Unicode and the comment formatter slices
//! timestamps by byte index, so the goal is to catch panics from slicing on
//! multi-byte characters and from escaping pathological summaries.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use jiralink::format;
use jiralink::models::{Author, Comment, Issue, IssueFields};

#[derive(Arbitrary, Debug)]
struct FormatInput {
    /// Issue key - can contain any Unicode
    key: String,
    /// Issue summary - can contain any Unicode, including quotes
    summary: String,
    /// Comment author / timestamp / body triples
    comments: Vec<(String, String, String)>,
}

fuzz_target!(|input: FormatInput| {
    let issue = Issue {
        key: input.key,
        fields: IssueFields {
            summary: input.summary,
            comment: None,
        },
    };

    let _ = format::issue_line(&issue);
    let _ = format::completion_menu(&[issue]);

    // Limit to a reasonable comment count
    let comments: Vec<Comment> = input
        .comments
        .into_iter()
        .take(20)
        .map(|(author, updated, body)| Comment {
            author: Author {
                display_name: author,
            },
            updated,
            body,
        })
        .collect();

    let _ = format::comment_block(&comments);
});
