//! JQL construction for the fixed filters the CLI issues.

/// Field set requested on every search. Keeping the projection narrow keeps
/// the unbounded search call cheap enough to skip pagination entirely.
pub const ISSUE_FIELDS: &str = "summary,comment";

/// Unresolved issues in a project, assigned to the authenticated user,
/// highest priority and most recently updated first.
pub fn assigned_issues(project: &str) -> String {
    format!(
        "project = {} AND resolution = Unresolved AND assignee in (currentUser()) \
         ORDER BY priority DESC, updated DESC",
        project
    )
}

/// Narrows the assigned-issues filter to a single issue key. Resolved issues
/// fall out of this filter, so their comments are intentionally not shown.
pub fn issue_comments(project: &str, key: &str) -> String {
    format!(
        "issue = \"{}\" AND project = {} AND resolution = Unresolved \
         ORDER BY priority DESC, updated DESC",
        key, project
    )
}
