use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author identity attached to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub email: String,
    /// Authoring timestamp
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Line change statistics, only present when the feed fetched them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStats {
    pub additions: u64,
    pub deletions: u64,
    pub total: u64,
}

/// A commit as delivered by the feed (newest-first)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    /// Unique commit ID (SHA)
    pub sha: String,
    /// Parent commit IDs, in order. May reference commits outside the window.
    pub parent_shas: Vec<String>,
    pub author: Author,
    /// Full commit message; the first line is the summary
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CommitStats>,
}

impl CommitRecord {
    pub fn new(
        sha: impl Into<String>,
        parent_shas: Vec<String>,
        author: Author,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sha: sha.into(),
            parent_shas,
            author,
            message: message.into(),
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: CommitStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parent_shas.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parent_shas.len() > 1
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        summary_of(&self.message)
    }

    /// Total changed lines, zero when stats were not fetched
    pub fn total_changes(&self) -> u64 {
        self.stats.map(|s| s.total).unwrap_or(0)
    }
}

pub(crate) fn summary_of(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            date: Utc::now(),
            avatar_url: None,
        }
    }

    #[test]
    fn summary_is_first_line() {
        let c = CommitRecord::new("a1", vec![], author(), "feat: init\n\nlong body");
        assert_eq!(c.summary(), "feat: init");
        assert!(c.is_root());
        assert!(!c.is_merge());
    }

    #[test]
    fn missing_stats_count_as_zero() {
        let c = CommitRecord::new("a1", vec![], author(), "x");
        assert_eq!(c.total_changes(), 0);
        let c = c.with_stats(CommitStats { additions: 3, deletions: 2, total: 5 });
        assert_eq!(c.total_changes(), 5);
    }
}
