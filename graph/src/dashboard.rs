use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{Alert, AnalyzerConfig, ConflictFileResolver, Recommendation, RiskAnalyzer};
use crate::core::{Branch, CommitGraph, CommitRecord, GraphNode};
use crate::layout::{LayoutEngine, Palette};

/// Layout and analysis settings for one dashboard build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOptions {
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

/// Everything the presentation layer draws for a commit window
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    pub nodes: Vec<GraphNode>,
    pub branches: Vec<Branch>,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
}

impl Dashboard {
    /// Rebuild the graph view (edges, lookups) from the nodes
    pub fn graph(&self) -> CommitGraph {
        CommitGraph::new(self.nodes.clone(), self.branches.clone())
    }
}

/// Lay out a newest-first commit window and analyze it
pub fn build_dashboard<R: ConflictFileResolver>(
    commits: &[CommitRecord],
    options: &DashboardOptions,
    resolver: R,
) -> Dashboard {
    let engine = LayoutEngine::new(options.palette.clone());
    let mut graph = engine.layout(commits);

    let analyzer = RiskAnalyzer::with_resolver(options.analyzer.clone(), resolver);
    let report = analyzer.analyze(&mut graph);

    info!(
        commits = graph.nodes.len(),
        branches = graph.branches.len(),
        alerts = report.alerts.len(),
        recommendations = report.recommendations.len(),
        "built dashboard"
    );

    Dashboard {
        nodes: graph.nodes,
        branches: graph.branches,
        alerts: report.alerts,
        recommendations: report.recommendations,
    }
}
