use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use super::commit::{summary_of, Author, CommitStats};

/// Short label derived from commit message keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Breaking,
    Feature,
    Fix,
    Docs,
    Test,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Breaking => "BREAKING",
            Tag::Feature => "FEATURE",
            Tag::Fix => "FIX",
            Tag::Docs => "DOCS",
            Tag::Test => "TEST",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Tags = SmallVec<[Tag; 5]>;

/// A positioned commit in the derived graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub sha: String,
    pub message: String,
    pub author: Author,
    pub parent_shas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CommitStats>,
    /// Inferred branch classification
    pub branch_label: String,
    pub tags: Tags,
    pub is_merge: bool,
    /// Always false after layout; set by `RiskAnalyzer::analyze`
    pub is_conflict_risk: bool,
    /// Only set when `is_conflict_risk` is true, also by the analyzer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_files: Option<Vec<String>>,
    /// Horizontal position (x)
    pub lane: usize,
    /// Vertical position (y), oldest commit is 0
    pub rank: usize,
    pub color: String,
}

impl GraphNode {
    pub fn is_root(&self) -> bool {
        self.parent_shas.is_empty()
    }

    pub fn summary(&self) -> &str {
        summary_of(&self.message)
    }

    pub fn total_changes(&self) -> u64 {
        self.stats.map(|s| s.total).unwrap_or(0)
    }

    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}
