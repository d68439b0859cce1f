use anyhow::Result;

use crate::client::JiraSession;

pub fn run(session: &JiraSession, key: &str, text: &str) -> Result<()> {
    session.add_comment(key, text)?;
    println!("Added comment to {}", key);
    Ok(())
}
