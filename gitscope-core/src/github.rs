//! GitHub REST payloads and their conversion into commit records.

use chrono::{DateTime, Utc};
use graph::{Author, CommitRecord, CommitStats};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::FeedError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: GitHubOwner,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    pub default_branch: String,
    #[serde(default)]
    pub open_issues_count: u64,
    pub pushed_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubOwner {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCommit {
    pub sha: String,
    pub commit: CommitDetail,
    /// Linked GitHub account, null for unknown emails
    pub author: Option<GitHubUser>,
    #[serde(default)]
    pub parents: Vec<ParentRef>,
    pub stats: Option<GitHubStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub author: GitSignature,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitSignature {
    pub name: String,
    pub email: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentRef {
    pub sha: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GitHubStats {
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubContributor {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub contributions: u64,
}

/// Bytes of code per language
pub type LanguageStats = HashMap<String, u64>;

impl GitHubCommit {
    /// Normalize into the record the graph engine consumes
    pub fn into_record(self) -> Result<CommitRecord, FeedError> {
        let date = DateTime::parse_from_rfc3339(&self.commit.author.date)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|_| FeedError::InvalidDate {
                sha: self.sha.clone(),
                value: self.commit.author.date.clone(),
            })?;

        let author = Author {
            name: self.commit.author.name,
            email: self.commit.author.email,
            date,
            avatar_url: self.author.and_then(|a| a.avatar_url),
        };

        Ok(CommitRecord {
            sha: self.sha,
            parent_shas: self.parents.into_iter().map(|p| p.sha).collect(),
            author,
            message: self.commit.message,
            stats: self.stats.map(|s| CommitStats {
                additions: s.additions,
                deletions: s.deletions,
                total: s.total,
            }),
        })
    }
}
