use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Merge,
    Rebase,
    Cleanup,
    Security,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedCommand {
    pub label: String,
    pub command: String,
    pub description: String,
}

impl SuggestedCommand {
    fn new(label: &str, command: impl Into<String>, description: &str) -> Self {
        Self {
            label: label.to_string(),
            command: command.into(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub commands: Vec<SuggestedCommand>,
}

impl Recommendation {
    pub(crate) fn merge_features(feature_branches: &[&str]) -> Option<Self> {
        let first = feature_branches.first()?;
        Some(Self {
            id: "merge-features".to_string(),
            kind: RecommendationKind::Merge,
            priority: Priority::Medium,
            title: "Merge de Features Pendentes".to_string(),
            description: format!(
                "Você tem {} branch(es) de feature que podem ser mescladas",
                feature_branches.len()
            ),
            commands: vec![
                SuggestedCommand::new(
                    "Merge Feature Branch",
                    format!("git checkout main && git merge {first}"),
                    "Mesclar branch de feature na main",
                ),
                SuggestedCommand::new(
                    "Rebase Feature Branch",
                    format!("git checkout {first} && git rebase main"),
                    "Rebase da feature branch com a main",
                ),
            ],
        })
    }

    pub(crate) fn cleanup_history() -> Self {
        Self {
            id: "cleanup-history".to_string(),
            kind: RecommendationKind::Cleanup,
            priority: Priority::Low,
            title: "Limpeza do Histórico".to_string(),
            description:
                "Considere fazer squash de commits antigos para manter o histórico limpo"
                    .to_string(),
            commands: vec![
                SuggestedCommand::new(
                    "Interactive Rebase",
                    "git rebase -i HEAD~20",
                    "Rebase interativo dos últimos 20 commits",
                ),
                SuggestedCommand::new(
                    "Squash Commits",
                    "git reset --soft HEAD~5 && git commit",
                    "Combinar últimos 5 commits em um",
                ),
            ],
        }
    }

    pub(crate) fn security_review() -> Self {
        Self {
            id: "security-review".to_string(),
            kind: RecommendationKind::Security,
            priority: Priority::High,
            title: "Revisão de Segurança".to_string(),
            description:
                "Commits com muitas mudanças detectados - revisar por questões de segurança"
                    .to_string(),
            commands: vec![
                SuggestedCommand::new(
                    "Audit Changes",
                    r#"git log --stat --since="1 week ago""#,
                    "Auditar mudanças da última semana",
                ),
                SuggestedCommand::new(
                    "Check Sensitive Files",
                    r#"git log --follow -- "*.env" "*.key" "*.pem""#,
                    "Verificar histórico de arquivos sensíveis",
                ),
            ],
        }
    }
}
