use serde::{Deserialize, Serialize};

use crate::core::GraphNode;

/// Thresholds for the risk heuristics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// A commit changing more lines than this is a conflict risk
    pub conflict_total_threshold: u64,
    /// A "fix" commit changing more lines than this raises a warning
    pub large_fix_threshold: u64,
    /// Any commit changing more lines than this triggers a security review
    pub security_total_threshold: u64,
    /// Age after which a commit counts as stale
    pub stale_months: u32,
    /// Cleanup is suggested when more stale commits than this are present
    pub stale_commit_count: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            conflict_total_threshold: 200,
            large_fix_threshold: 100,
            security_total_threshold: 1000,
            stale_months: 6,
            stale_commit_count: 50,
        }
    }
}

const CONFLICT_KEYWORDS: [&str; 3] = ["conflict", "merge", "resolve"];

impl AnalyzerConfig {
    /// Merge commits, conflict keywords, or oversized change sets
    pub fn is_conflict_risk(&self, node: &GraphNode) -> bool {
        if node.is_merge {
            return true;
        }
        let lower = node.message.to_lowercase();
        if CONFLICT_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return true;
        }
        node.stats
            .is_some_and(|s| s.total > self.conflict_total_threshold)
    }

    pub fn is_large_fix(&self, node: &GraphNode) -> bool {
        node.message.to_lowercase().contains("fix")
            && node.stats.is_some_and(|s| s.total > self.large_fix_threshold)
    }

    pub fn is_security_sized(&self, node: &GraphNode) -> bool {
        node.stats
            .is_some_and(|s| s.total > self.security_total_threshold)
    }
}
