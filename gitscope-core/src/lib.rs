pub mod activity;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod feed;
pub mod github;
pub mod local;

pub use activity::{daily_activity, language_breakdown, top_contributors, DailyActivity, LanguageShare};
pub use client::{GitHubClient, RepoSnapshot};
pub use commands::{catalog, ActionCategory, GitAction, Selection};
pub use config::{GithubConfig, GitscopeConfig, LayoutConfig};
pub use error::FeedError;
pub use feed::{parse_commit_feed, read_commit_feed};
pub use github::{GitHubCommit, GitHubContributor, GitHubRepository, LanguageStats};
pub use local::LocalWalker;
