use anyhow::Result;

use crate::client::JiraSession;
use crate::format;

/// The at-a-glance sequence an editor shows on startup: the assigned-issue
/// list, then the comment block of each requested key.
pub fn run(session: &JiraSession, project: &str, keys: &[String]) -> Result<()> {
    println!();
    println!("Active Issues");
    println!("=============");

    let issues = session.my_issues(project)?;
    for issue in &issues {
        println!("{}", format::issue_line(issue));
    }

    for key in keys {
        println!();
        let issue = session.issue(key)?;
        println!("Issue: {}", issue.key);
        let comments = session.issue_comments(project, &issue.key)?;
        print!("{}", format::comment_block(&comments));
    }

    Ok(())
}
