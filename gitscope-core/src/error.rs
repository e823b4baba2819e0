use thiserror::Error;

/// Errors raised at the commit-feed boundary, before data reaches the graph
#[derive(Error, Debug)]
pub enum FeedError {
    /// The payload parsed as JSON but is not an array of commits.
    #[error("commit feed must be a JSON array, got {0}")]
    NotAList(&'static str),

    /// The payload is not valid JSON or misses required fields.
    #[error("invalid commit feed: {0}")]
    Json(#[from] serde_json::Error),

    /// An author date is not RFC 3339.
    #[error("commit {sha} has an invalid author date {value:?}")]
    InvalidDate { sha: String, value: String },

    /// Transport-level HTTP failure.
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-success status.
    #[error("GitHub API error: {status} for {url}")]
    Status { status: u16, url: String },

    /// The concurrent fetch did not finish in time.
    #[error("GitHub fetch timed out after {0}s")]
    Timeout(u64),
}
