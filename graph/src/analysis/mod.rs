pub mod alert;
pub mod analyzer;
pub mod config;
pub mod conflict;
pub mod recommendation;

pub use alert::{Alert, AlertAction, AlertKind};
pub use analyzer::{RiskAnalyzer, RiskReport};
pub use config::AnalyzerConfig;
pub use conflict::{
    ConflictFileResolver, ConflictFilesError, FixedConflictFiles, RandomConflictFiles,
    MAX_CONFLICT_FILES,
};
pub use recommendation::{Priority, Recommendation, RecommendationKind, SuggestedCommand};
