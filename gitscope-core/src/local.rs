//! Commit windows read from a local repository.

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use git2::{Commit, DiffOptions, Repository, Sort};
use graph::{Author, CommitRecord, CommitStats};
use std::path::Path;
use tracing::debug;

pub struct LocalWalker {
    repo: Repository,
}

impl LocalWalker {
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .with_context(|| format!("Failed to open repository at {}", path.display()))?;
        Ok(Self { repo })
    }

    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    /// Walk HEAD and every local branch, newest first.
    ///
    /// `with_stats` diffs each commit against its first parent, which is slow
    /// on large histories.
    pub fn commits(&self, limit: Option<usize>, with_stats: bool) -> Result<Vec<CommitRecord>> {
        let mut revwalk = self.repo.revwalk()?;

        let mut pushed = false;
        if self.repo.head().is_ok() {
            revwalk.push_head()?;
            pushed = true;
        }
        for branch in self.repo.branches(Some(git2::BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(target) = branch.get().target() {
                revwalk.push(target)?;
                pushed = true;
            }
        }
        if !pushed {
            // Unborn HEAD, nothing committed yet
            return Ok(Vec::new());
        }
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut records = Vec::new();
        for oid in revwalk.take(limit.unwrap_or(usize::MAX)) {
            let commit = self.repo.find_commit(oid?)?;
            let mut record = commit_to_record(&commit)?;
            if with_stats {
                record.stats = Some(self.stats_for(&commit)?);
            }
            records.push(record);
        }

        debug!(commits = records.len(), with_stats, "walked local repository");
        Ok(records)
    }

    fn stats_for(&self, commit: &Commit) -> Result<CommitStats> {
        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };

        let mut opts = DiffOptions::new();
        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
        let stats = diff.stats()?;

        let additions = stats.insertions() as u64;
        let deletions = stats.deletions() as u64;
        Ok(CommitStats {
            additions,
            deletions,
            total: additions + deletions,
        })
    }
}

fn commit_to_record(commit: &Commit) -> Result<CommitRecord> {
    let author = commit.author();
    let date = Utc
        .timestamp_opt(author.when().seconds(), 0)
        .single()
        .context("Invalid commit timestamp")?;

    Ok(CommitRecord::new(
        commit.id().to_string(),
        commit.parent_ids().map(|oid| oid.to_string()).collect(),
        Author {
            name: author.name().unwrap_or("Unknown").to_string(),
            email: author.email().unwrap_or("").to_string(),
            date,
            avatar_url: None,
        },
        String::from_utf8_lossy(commit.message_bytes()).into_owned(),
    ))
}
