//! jiralink exposes the session, query, model, and formatting modules so the
//! binary, tests, and fuzz targets share one surface.

/// Authenticated Jira session and the read/write operations on it.
pub mod client;
/// Subcommand implementations.
pub mod commands;
/// Connection settings and password resolution.
pub mod config;
/// Display formatting for editor consumption.
pub mod format;
/// Wire models for the Jira REST payloads.
pub mod models;
/// JQL construction for the fixed filters.
pub mod query;
