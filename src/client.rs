use anyhow::{anyhow, bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{
    Comment, CommentInsert, CurrentUser, Issue, SearchResponse, Transition, TransitionId,
    TransitionRequest, TransitionsResponse, WorklogInsert,
};
use crate::query;

/// Authenticated handle to a Jira server. Constructed once at startup and
/// passed by reference into every command; dropped at process exit.
///
/// Every method issues a single blocking request and materializes the full
/// response. Transport and HTTP-status failures propagate as errors with the
/// failed operation named; there is no retry.
pub struct JiraSession {
    agent: ureq::Agent,
    server: String,
    auth: String,
}

impl JiraSession {
    /// Builds the session and validates the credentials with one round trip
    /// to the current-user endpoint.
    pub fn connect(config: &Config) -> Result<Self> {
        let auth = format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", config.user, config.password))
        );
        let session = JiraSession {
            agent: ureq::AgentBuilder::new().build(),
            server: config.server.clone(),
            auth,
        };

        let me: CurrentUser = session
            .get("/rest/api/2/myself")
            .call()
            .context("Authentication against Jira failed")?
            .into_json()
            .context("Malformed current-user response")?;
        info!("Connected to {} as {}", session.server, me.display_name);

        Ok(session)
    }

    fn get(&self, path: &str) -> ureq::Request {
        debug!("GET {}", path);
        self.agent
            .get(&format!("{}{}", self.server, path))
            .set("Authorization", &self.auth)
    }

    fn post(&self, path: &str) -> ureq::Request {
        debug!("POST {}", path);
        self.agent
            .post(&format!("{}{}", self.server, path))
            .set("Authorization", &self.auth)
    }

    /// One unbounded search call, restricted to the summary and comment
    /// fields.
    pub fn search(&self, jql: &str) -> Result<SearchResponse> {
        self.get("/rest/api/2/search")
            .query("jql", jql)
            .query("fields", query::ISSUE_FIELDS)
            .call()
            .context("Issue search failed")?
            .into_json()
            .context("Malformed search response")
    }

    /// Unresolved issues assigned to the authenticated user.
    pub fn my_issues(&self, project: &str) -> Result<Vec<Issue>> {
        Ok(self.search(&query::assigned_issues(project))?.issues)
    }

    pub fn issue(&self, key: &str) -> Result<Issue> {
        self.get(&format!("/rest/api/2/issue/{}", key))
            .query("fields", query::ISSUE_FIELDS)
            .call()
            .with_context(|| format!("Failed to fetch issue {}", key))?
            .into_json()
            .context("Malformed issue response")
    }

    /// Comments of one issue, in tracker order. The narrowed search filter
    /// only matches unresolved issues in the project, so a resolved or
    /// foreign key reports not-found.
    pub fn issue_comments(&self, project: &str, key: &str) -> Result<Vec<Comment>> {
        let mut response = self.search(&query::issue_comments(project, key))?;
        if response.issues.is_empty() {
            bail!("Issue {} not found among unresolved issues in {}", key, project);
        }

        let issue = response.issues.remove(0);
        Ok(issue
            .fields
            .comment
            .map(|page| page.comments)
            .unwrap_or_default())
    }

    /// Forwards the comment text verbatim.
    pub fn add_comment(&self, key: &str, body: &str) -> Result<()> {
        self.post(&format!("/rest/api/2/issue/{}/comment", key))
            .send_json(CommentInsert {
                body: body.to_string(),
            })
            .with_context(|| format!("Failed to add comment to {}", key))?;
        Ok(())
    }

    /// Records a work log ending now: the start time is the submission time
    /// minus the duration.
    pub fn add_worklog(&self, key: &str, seconds: i64, comment: &str) -> Result<()> {
        let started = started_at(Utc::now(), seconds);
        self.post(&format!("/rest/api/2/issue/{}/worklog", key))
            .send_json(WorklogInsert {
                time_spent_seconds: seconds,
                comment: comment.to_string(),
                started: jira_timestamp(started),
            })
            .with_context(|| format!("Failed to log work on {}", key))?;
        Ok(())
    }

    pub fn transitions(&self, key: &str) -> Result<Vec<Transition>> {
        let response: TransitionsResponse = self
            .get(&format!("/rest/api/2/issue/{}/transitions", key))
            .call()
            .with_context(|| format!("Failed to fetch transitions for {}", key))?
            .into_json()
            .context("Malformed transitions response")?;
        Ok(response.transitions)
    }

    /// Resolves the status label against the transitions the tracker offers
    /// and forwards the matching id. Workflow legality stays server-side.
    pub fn set_status(&self, key: &str, status: &str) -> Result<()> {
        let transitions = self.transitions(key)?;
        let transition = find_transition(&transitions, status).ok_or_else(|| {
            let names: Vec<&str> = transitions.iter().map(|t| t.name.as_str()).collect();
            anyhow!(
                "No transition named '{}' for {}. Available: {}",
                status,
                key,
                names.join(", ")
            )
        })?;

        self.post(&format!("/rest/api/2/issue/{}/transitions", key))
            .send_json(TransitionRequest {
                transition: TransitionId {
                    id: transition.id.clone(),
                },
            })
            .with_context(|| format!("Failed to transition {} to '{}'", key, status))?;
        Ok(())
    }
}

/// Start of a work interval that ends at `now` and lasted `seconds`.
pub fn started_at(now: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
    now - Duration::seconds(seconds)
}

/// Jira's timestamp format, e.g. "2024-01-02T03:04:05.000+0000".
pub fn jira_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string()
}

/// Case-insensitive label match against the tracker's transition list.
pub fn find_transition<'a>(transitions: &'a [Transition], name: &str) -> Option<&'a Transition> {
    transitions
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}
