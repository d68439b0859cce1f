use anyhow::Result;

use crate::client::JiraSession;

pub fn run(session: &JiraSession, key: &str, status: &str) -> Result<()> {
    session.set_status(key, status)?;
    println!("Transitioned {} to '{}'", key, status);
    Ok(())
}
