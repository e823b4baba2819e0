use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Conflict,
    Warning,
    Info,
    Danger,
}

/// A command attached to an alert's action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertAction {
    pub label: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Stable identifier derived from kind and commit
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AlertAction>,
}

impl Alert {
    pub(crate) fn conflict(sha: &str, summary: &str, files: Option<Vec<String>>) -> Self {
        Self {
            id: format!("conflict-{sha}"),
            kind: AlertKind::Conflict,
            title: "Conflito Detectado".to_string(),
            description: format!("Possível conflito no commit \"{summary}\""),
            related_commit: Some(sha.to_string()),
            files,
            action: Some(AlertAction {
                label: "Resolver Conflito".to_string(),
                command: format!("git checkout {sha} && git merge --abort"),
            }),
        }
    }

    pub(crate) fn large_fix(sha: &str, total: u64) -> Self {
        Self {
            id: format!("large-fix-{sha}"),
            kind: AlertKind::Warning,
            title: "Grande Correção".to_string(),
            description: format!(
                "Commit de correção com {total} mudanças - considere revisar"
            ),
            related_commit: Some(sha.to_string()),
            files: None,
            action: Some(AlertAction {
                label: "Revisar Commit".to_string(),
                command: format!("git show {sha}"),
            }),
        }
    }
}
