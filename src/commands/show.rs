use anyhow::Result;

use crate::client::JiraSession;
use crate::format;

pub fn run(session: &JiraSession, project: &str, key: &str) -> Result<()> {
    let issue = session.issue(key)?;

    println!("Issue: {}", issue.key);
    println!("{}", issue.fields.summary);

    let comments = session.issue_comments(project, &issue.key)?;
    let block = format::comment_block(&comments);
    if !block.is_empty() {
        println!();
        print!("{}", block);
    }

    Ok(())
}
