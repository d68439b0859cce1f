use serde::{Deserialize, Serialize};

// Response projections of the Jira REST v2 payloads. Only the fields the
// CLI actually reads are declared; everything else is ignored on the wire.

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    pub summary: String,
    #[serde(default)]
    pub comment: Option<CommentPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub author: Author,
    /// Raw Jira timestamp, e.g. "2024-01-02T03:04:05.000+0000".
    pub updated: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransitionsResponse {
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
}

// Request bodies for the mutating endpoints.

#[derive(Debug, Clone, Serialize)]
pub struct CommentInsert {
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorklogInsert {
    #[serde(rename = "timeSpentSeconds")]
    pub time_spent_seconds: i64,
    pub comment: String,
    /// Jira timestamp format: "%Y-%m-%dT%H:%M:%S%.3f%z".
    pub started: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionRequest {
    pub transition: TransitionId,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionId {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let payload = serde_json::json!({
            "startAt": 0,
            "maxResults": 50,
            "total": 2,
            "issues": [
                {
                    "key": "AC-1",
                    "fields": {
                        "summary": "First issue",
                        "comment": {
                            "comments": [
                                {
                                    "author": {"displayName": "Mike Boiko", "active": true},
                                    "updated": "2024-01-02T03:04:05.000+0000",
                                    "created": "2024-01-01T00:00:00.000+0000",
                                    "body": "Looks good"
                                }
                            ]
                        }
                    }
                },
                {
                    "key": "AC-2",
                    "fields": {"summary": "Second issue"}
                }
            ]
        });

        let parsed: SearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.issues.len(), 2);
        assert_eq!(parsed.issues[0].key, "AC-1");

        let comments = &parsed.issues[0].fields.comment.as_ref().unwrap().comments;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author.display_name, "Mike Boiko");
        assert_eq!(comments[0].body, "Looks good");

        // Issues fetched without the comment field still parse
        assert!(parsed.issues[1].fields.comment.is_none());
    }

    #[test]
    fn test_parse_transitions_response() {
        let payload = serde_json::json!({
            "transitions": [
                {"id": "11", "name": "Selected for Development", "to": {"name": "Selected"}},
                {"id": "21", "name": "In Progress"},
                {"id": "31", "name": "Done"}
            ]
        });

        let parsed: TransitionsResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.transitions.len(), 3);
        assert_eq!(parsed.transitions[1].id, "21");
        assert_eq!(parsed.transitions[1].name, "In Progress");
    }

    #[test]
    fn test_worklog_insert_wire_names() {
        let insert = WorklogInsert {
            time_spent_seconds: 3600,
            comment: "refactoring".to_string(),
            started: "2024-01-02T03:04:05.000+0000".to_string(),
        };

        let json = serde_json::to_value(&insert).unwrap();
        assert_eq!(json["timeSpentSeconds"], 3600);
        assert_eq!(json["comment"], "refactoring");
        assert_eq!(json["started"], "2024-01-02T03:04:05.000+0000");
    }

    #[test]
    fn test_transition_request_shape() {
        let req = TransitionRequest {
            transition: TransitionId {
                id: "21".to_string(),
            },
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["transition"]["id"], "21");
    }
}
