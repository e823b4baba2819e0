//! Validation boundary for commit feeds.

use graph::CommitRecord;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::error::FeedError;
use crate::github::GitHubCommit;

/// Parse a GitHub `/commits` payload into newest-first commit records.
///
/// Rejects anything that is not a JSON array of commit objects.
pub fn parse_commit_feed(json: &str) -> Result<Vec<CommitRecord>, FeedError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(FeedError::NotAList(json_kind(&value)));
    }

    let commits: Vec<GitHubCommit> = serde_json::from_value(value)?;
    let records = normalize(commits)?;
    debug!(commits = records.len(), "parsed commit feed");
    Ok(records)
}

/// Read and parse a feed saved to disk
pub fn read_commit_feed(path: &Path) -> anyhow::Result<Vec<CommitRecord>> {
    use anyhow::Context;

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read commit feed {}", path.display()))?;
    Ok(parse_commit_feed(&json)?)
}

pub fn normalize(commits: Vec<GitHubCommit>) -> Result<Vec<CommitRecord>, FeedError> {
    commits.into_iter().map(GitHubCommit::into_record).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FEED: &str = r#"[
        {
            "sha": "b2",
            "commit": {
                "author": {"name": "Bia", "email": "bia@example.com", "date": "2024-05-02T10:00:00Z"},
                "committer": {"name": "Bia", "email": "bia@example.com", "date": "2024-05-02T10:00:00Z"},
                "message": "Merge conflict resolve\n\nbody"
            },
            "author": {"login": "bia", "avatar_url": "https://avatars.example.com/bia"},
            "committer": null,
            "parents": [{"sha": "a1", "url": "x"}, {"sha": "c9"}],
            "stats": {"additions": 40, "deletions": 10, "total": 50}
        },
        {
            "sha": "a1",
            "commit": {
                "author": {"name": "Ana", "email": "ana@example.com", "date": "2024-05-01T09:30:00-03:00"},
                "message": "feat: init"
            },
            "author": null
        }
    ]"#;

    #[test]
    fn parses_github_payload() {
        let records = parse_commit_feed(FEED).unwrap();
        assert_eq!(records.len(), 2);

        let b2 = &records[0];
        assert_eq!(b2.parent_shas, vec!["a1".to_string(), "c9".to_string()]);
        assert_eq!(b2.stats.unwrap().total, 50);
        assert_eq!(b2.author.avatar_url.as_deref(), Some("https://avatars.example.com/bia"));

        let a1 = &records[1];
        assert!(a1.parent_shas.is_empty());
        assert!(a1.stats.is_none());
        assert!(a1.author.avatar_url.is_none());
        assert_eq!(a1.author.date.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn rejects_non_list() {
        let err = parse_commit_feed(r#"{"message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, FeedError::NotAList("an object")));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_commit_feed(r#"[{"sha": "a1"}]"#).unwrap_err();
        assert!(matches!(err, FeedError::Json(_)));
    }

    #[test]
    fn rejects_bad_dates() {
        let json = r#"[{"sha": "a1", "commit": {"author": {"name": "A", "email": "a@x", "date": "yesterday"}, "message": "m"}, "author": null}]"#;
        let err = parse_commit_feed(json).unwrap_err();
        assert!(matches!(err, FeedError::InvalidDate { ref sha, .. } if sha == "a1"));
    }

    #[test]
    fn empty_feed() {
        assert!(parse_commit_feed("[]").unwrap().is_empty());
    }
}
