use serde::Serialize;

/// One entry per distinct inferred branch label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: String,
    pub color: String,
    pub lane: usize,
    pub is_active: bool,
    pub last_commit_sha: String,
}
