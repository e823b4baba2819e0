//! Branch-name inference.
//!
//! Commit feeds from the REST API carry no ref membership, so the branch a
//! commit belongs to is guessed from its message. The guess lives behind
//! [`BranchLabeler`] so a ref-backed implementation can replace it without
//! touching the layout engine.

use crate::core::CommitRecord;

pub const MAIN: &str = "main";
pub const FEATURE: &str = "feature";
pub const HOTFIX: &str = "hotfix";
pub const DEVELOP: &str = "develop";
pub const RELEASE: &str = "release";

/// Assigns a branch label to a commit
pub trait BranchLabeler {
    fn label(&self, commit: &CommitRecord) -> String;
}

/// Keyword rules checked in order, first match wins
const MESSAGE_RULES: &[(&[&str], &str)] = &[
    (&["feature", "feat"], FEATURE),
    (&["fix", "hotfix"], HOTFIX),
    (&["develop", "dev"], DEVELOP),
    (&["release"], RELEASE),
];

/// Heuristic labeler: merges go to `main`, everything else is classified by
/// case-insensitive keywords in the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageHeuristic;

impl MessageHeuristic {
    pub fn label_message(message: &str) -> &'static str {
        let lower = message.to_lowercase();
        MESSAGE_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, label)| *label)
            .unwrap_or(MAIN)
    }
}

impl BranchLabeler for MessageHeuristic {
    fn label(&self, commit: &CommitRecord) -> String {
        if commit.is_merge() {
            return MAIN.to_string();
        }
        Self::label_message(&commit.message).to_string()
    }
}
