use anyhow::Result;

use crate::client::JiraSession;
use crate::format;

pub fn run(session: &JiraSession, project: &str, menu: bool) -> Result<()> {
    let issues = session.my_issues(project)?;

    if menu {
        // Editor completion consumes this verbatim; empty result prints an
        // empty line rather than a human message.
        println!("{}", format::completion_menu(&issues));
        return Ok(());
    }

    if issues.is_empty() {
        println!("No issues assigned to you in {}.", project);
        return Ok(());
    }

    for issue in &issues {
        println!("{}", format::issue_line(issue));
    }

    Ok(())
}
