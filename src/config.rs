use anyhow::{Context, Result};

/// Resolved connection settings. Built once in `main` from flags and
/// environment, then handed to the session factory.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: String,
    pub user: String,
    pub project: String,
    pub password: String,
}

impl Config {
    pub fn new(
        server: String,
        user: String,
        project: String,
        password: Option<String>,
    ) -> Result<Self> {
        let password = resolve_password(password)?;
        Ok(Config {
            server: server.trim_end_matches('/').to_string(),
            user,
            project,
            password,
        })
    }
}

/// A supplied password wins; otherwise prompt with echo disabled.
fn resolve_password(supplied: Option<String>) -> Result<String> {
    match supplied {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Password: ").context("Failed to read password"),
    }
}
