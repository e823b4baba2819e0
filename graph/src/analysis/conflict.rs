//! Files reported for conflict-risk commits.
//!
//! The commit feed carries no per-file diff, so the default resolver picks a
//! prefix of commonly conflicting files at random. It is a placeholder: swap
//! in a resolver backed by a real diff lookup without changing the analyzer.

use rand::Rng;
use thiserror::Error;

use crate::core::GraphNode;

/// Files that tend to conflict in JavaScript projects
pub const COMMON_CONFLICT_FILES: [&str; 6] = [
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "README.md",
    "src/index.js",
    "src/App.js",
];

/// Most files reported for a single node
pub const MAX_CONFLICT_FILES: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConflictFilesError {
    #[error("conflict file list must not be empty")]
    Empty,
    #[error("conflict file list holds {0} entries, at most 3 allowed")]
    TooMany(usize),
}

/// Supplies the file list attached to a conflict-risk node.
/// Implementations return between 1 and [`MAX_CONFLICT_FILES`] entries.
pub trait ConflictFileResolver {
    fn resolve(&self, node: &GraphNode) -> Vec<String>;
}

impl<T: ConflictFileResolver + ?Sized> ConflictFileResolver for &T {
    fn resolve(&self, node: &GraphNode) -> Vec<String> {
        (**self).resolve(node)
    }
}

impl<T: ConflictFileResolver + ?Sized> ConflictFileResolver for Box<T> {
    fn resolve(&self, node: &GraphNode) -> Vec<String> {
        (**self).resolve(node)
    }
}

/// Random-length (1 to 3) prefix of [`COMMON_CONFLICT_FILES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomConflictFiles;

impl ConflictFileResolver for RandomConflictFiles {
    fn resolve(&self, _node: &GraphNode) -> Vec<String> {
        let len = rand::thread_rng().gen_range(1..=MAX_CONFLICT_FILES);
        common_prefix(len)
    }
}

/// Deterministic resolver returning the same files for every node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedConflictFiles {
    files: Vec<String>,
}

impl FixedConflictFiles {
    pub fn new(files: Vec<String>) -> Result<Self, ConflictFilesError> {
        match files.len() {
            0 => Err(ConflictFilesError::Empty),
            n if n > MAX_CONFLICT_FILES => Err(ConflictFilesError::TooMany(n)),
            _ => Ok(Self { files }),
        }
    }

    /// First `len` common conflict files, `len` clamped to `1..=3`
    pub fn prefix(len: usize) -> Self {
        Self {
            files: common_prefix(len.clamp(1, MAX_CONFLICT_FILES)),
        }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}

impl ConflictFileResolver for FixedConflictFiles {
    fn resolve(&self, _node: &GraphNode) -> Vec<String> {
        self.files.clone()
    }
}

fn common_prefix(len: usize) -> Vec<String> {
    COMMON_CONFLICT_FILES
        .iter()
        .take(len)
        .map(|f| f.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_and_oversized_lists() {
        assert_eq!(FixedConflictFiles::new(Vec::new()), Err(ConflictFilesError::Empty));

        let four = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
        assert_eq!(FixedConflictFiles::new(four), Err(ConflictFilesError::TooMany(4)));

        let fixed = FixedConflictFiles::new(vec!["Cargo.lock".to_string()]).unwrap();
        assert_eq!(fixed.files(), ["Cargo.lock"]);
    }

    #[test]
    fn test_prefix_is_clamped() {
        assert_eq!(FixedConflictFiles::prefix(0).files(), ["package.json"]);
        assert_eq!(FixedConflictFiles::prefix(2).files(), ["package.json", "package-lock.json"]);
        assert_eq!(FixedConflictFiles::prefix(10).files().len(), MAX_CONFLICT_FILES);
    }
}
