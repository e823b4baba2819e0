use super::{branch::Branch, edge::Edge, node::GraphNode};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Positioned commit graph for one commit window
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommitGraph {
    /// Nodes in processing order (oldest first, `rank == index`)
    pub nodes: Vec<GraphNode>,
    pub branches: Vec<Branch>,
    /// Quick lookup: commit ID -> index into `nodes`
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl CommitGraph {
    pub fn new(nodes: Vec<GraphNode>, branches: Vec<Branch>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            index.entry(node.sha.clone()).or_insert(i);
        }
        Self { nodes, branches, index }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by SHA
    pub fn node(&self, sha: &str) -> Option<&GraphNode> {
        self.index.get(sha).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, sha: &str) -> bool {
        self.index.contains_key(sha)
    }

    /// Every child -> parent link whose parent is inside the window.
    /// Parents outside the window produce no edge.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for node in &self.nodes {
            for parent_sha in &node.parent_shas {
                let Some(parent) = self.node(parent_sha) else {
                    continue;
                };
                let edge = if node.is_merge {
                    Edge::merge(node.sha.clone(), parent.sha.clone(), node.lane, parent.lane)
                } else {
                    Edge::new(node.sha.clone(), parent.sha.clone(), node.lane, parent.lane)
                };
                edges.push(edge);
            }
        }
        edges
    }

    /// Get parents of a commit that are present in the window
    pub fn parents_of(&self, sha: &str) -> Vec<&GraphNode> {
        self.node(sha)
            .map(|node| {
                node.parent_shas
                    .iter()
                    .filter_map(|id| self.node(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get children of a commit
    pub fn children_of(&self, sha: &str) -> Vec<&GraphNode> {
        self.nodes
            .iter()
            .filter(|n| n.parent_shas.iter().any(|p| p == sha))
            .collect()
    }

    /// Nodes without any parent (true roots of history)
    pub fn roots(&self) -> Vec<&GraphNode> {
        self.nodes.iter().filter(|n| n.is_root()).collect()
    }

    /// Nodes no other node in the window points at
    pub fn leaves(&self) -> Vec<&GraphNode> {
        let referenced: HashSet<&str> = self
            .nodes
            .iter()
            .flat_map(|n| n.parent_shas.iter().map(String::as_str))
            .collect();
        self.nodes
            .iter()
            .filter(|n| !referenced.contains(n.sha.as_str()))
            .collect()
    }

    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name == name)
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        let dangling_parents = self
            .nodes
            .iter()
            .flat_map(|n| n.parent_shas.iter())
            .filter(|p| !self.contains(p))
            .count();

        GraphStats {
            total_commits: self.nodes.len(),
            total_edges: self.edges().len(),
            merge_commits: self.nodes.iter().filter(|n| n.is_merge).count(),
            root_commits: self.roots().len(),
            leaf_commits: self.leaves().len(),
            dangling_parents,
            lane_count: self.branches.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub total_commits: usize,
    pub total_edges: usize,
    pub merge_commits: usize,
    pub root_commits: usize,
    pub leaf_commits: usize,
    /// Parent links pointing outside the window
    pub dangling_parents: usize,
    pub lane_count: usize,
}
