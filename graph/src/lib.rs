//! Commit-graph derivation and heuristic risk analysis.
//!
//! [`layout`] turns a newest-first commit window into positioned nodes with
//! lanes and colors; [`analysis::RiskAnalyzer`] flags conflict risk and
//! suggests git commands. Both are pure and never fail on well-typed input.

pub mod analysis;
pub mod core;
pub mod dashboard;
pub mod decor;
pub mod layout;
pub mod render;

pub use analysis::{
    Alert, AlertAction, AlertKind, AnalyzerConfig, ConflictFileResolver, ConflictFilesError,
    FixedConflictFiles, Priority, RandomConflictFiles, Recommendation, RecommendationKind, RiskAnalyzer, RiskReport,
    SuggestedCommand,
};
pub use self::core::{
    Author, Branch, CommitGraph, CommitRecord, CommitStats, Edge, EdgeShape, GraphNode,
    GraphStats, Tag,
};
pub use dashboard::{build_dashboard, Dashboard, DashboardOptions};
pub use decor::{BranchLabeler, MessageHeuristic};
pub use layout::{layout, LayoutEngine, Palette};
pub use render::{Charset, TextRenderer};
