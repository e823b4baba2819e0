use tracing::debug;

use super::lanes::LaneAllocator;
use super::palette::Palette;
use crate::core::{Branch, CommitGraph, CommitRecord, GraphNode};
use crate::decor::branch::MAIN;
use crate::decor::{extract_tags, BranchLabeler, MessageHeuristic};

/// Derives lanes, ranks and colors from a newest-first commit window
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine<L = MessageHeuristic> {
    palette: Palette,
    labeler: L,
}

impl LayoutEngine<MessageHeuristic> {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            labeler: MessageHeuristic,
        }
    }
}

impl<L: BranchLabeler> LayoutEngine<L> {
    pub fn with_labeler(palette: Palette, labeler: L) -> Self {
        Self { palette, labeler }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Lay out a commit window delivered newest-first.
    ///
    /// Processing runs oldest to newest, so the oldest commit gets rank 0.
    /// Conflict annotations are left unset for the analyzer.
    pub fn layout(&self, commits: &[CommitRecord]) -> CommitGraph {
        let mut lanes = LaneAllocator::new(&self.palette);
        let mut nodes = Vec::with_capacity(commits.len());

        for (rank, commit) in commits.iter().rev().enumerate() {
            let branch_label = self.labeler.label(commit);
            let assignment = lanes.assign(&branch_label);

            nodes.push(GraphNode {
                sha: commit.sha.clone(),
                message: commit.message.clone(),
                author: commit.author.clone(),
                parent_shas: commit.parent_shas.clone(),
                stats: commit.stats,
                tags: extract_tags(&commit.message),
                is_merge: commit.is_merge(),
                is_conflict_risk: false,
                conflict_files: None,
                lane: assignment.lane,
                rank,
                color: assignment.color.clone(),
                branch_label,
            });
        }

        let branches = lanes
            .iter()
            .map(|(name, assignment)| Branch {
                name: name.to_string(),
                color: assignment.color.clone(),
                lane: assignment.lane,
                is_active: name == MAIN,
                last_commit_sha: nodes
                    .iter()
                    .find(|n| n.branch_label == name)
                    .map(|n| n.sha.clone())
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>();

        debug!(
            commits = nodes.len(),
            lanes = lanes.lane_count(),
            "laid out commit window"
        );

        CommitGraph::new(nodes, branches)
    }
}

/// Lay out a window with the default palette and message heuristic.
/// Run `RiskAnalyzer::analyze` on the result to fill in conflict risk.
pub fn layout(commits: &[CommitRecord]) -> CommitGraph {
    LayoutEngine::new(Palette::default()).layout(commits)
}
