//! Catalog of git commands the dashboard can generate.
//!
//! Commands are returned as text for the user to copy; nothing here runs git.

use serde::Serialize;

const DEFAULT_BRANCH_NAME: &str = "nova-branch";
const DEFAULT_COMMIT_MESSAGE: &str = "Nova mensagem";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitAction {
    // Conflict resolution
    AcceptOurs,
    AcceptTheirs,
    ContinueMerge,
    AbortMerge,

    // Branch management
    CreateBranch { name: String },
    Checkout { branch: String },
    DeleteBranch { branch: String },
    PushBranch { branch: String },

    // Commit manipulation
    ResetSoft,
    ResetHard,
    Amend { message: String },

    // Stash
    StashPush,
    StashApply,
    StashList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionCategory {
    ConflictResolution,
    BranchManagement,
    CommitManipulation,
    Stash,
}

impl GitAction {
    /// Literal command text for this action
    pub fn command(&self) -> String {
        match self {
            GitAction::AcceptOurs => "git checkout --ours .".to_string(),
            GitAction::AcceptTheirs => "git checkout --theirs .".to_string(),
            GitAction::ContinueMerge => "git merge --continue".to_string(),
            GitAction::AbortMerge => "git merge --abort".to_string(),
            GitAction::CreateBranch { name } => {
                format!("git checkout -b {}", or_default(name, DEFAULT_BRANCH_NAME))
            }
            GitAction::Checkout { branch } => format!("git checkout {branch}"),
            GitAction::DeleteBranch { branch } => format!("git branch -d {branch}"),
            GitAction::PushBranch { branch } => format!("git push -u origin {branch}"),
            GitAction::ResetSoft => "git reset --soft HEAD~1".to_string(),
            GitAction::ResetHard => "git reset --hard HEAD~1".to_string(),
            GitAction::Amend { message } => format!(
                "git commit --amend -m \"{}\"",
                or_default(message, DEFAULT_COMMIT_MESSAGE).replace('"', "\\\"")
            ),
            GitAction::StashPush => "git stash push -m \"Alterações temporárias\"".to_string(),
            GitAction::StashApply => "git stash apply".to_string(),
            GitAction::StashList => "git stash list".to_string(),
        }
    }

    pub fn category(&self) -> ActionCategory {
        match self {
            GitAction::AcceptOurs
            | GitAction::AcceptTheirs
            | GitAction::ContinueMerge
            | GitAction::AbortMerge => ActionCategory::ConflictResolution,
            GitAction::CreateBranch { .. }
            | GitAction::Checkout { .. }
            | GitAction::DeleteBranch { .. }
            | GitAction::PushBranch { .. } => ActionCategory::BranchManagement,
            GitAction::ResetSoft | GitAction::ResetHard | GitAction::Amend { .. } => {
                ActionCategory::CommitManipulation
            }
            GitAction::StashPush | GitAction::StashApply | GitAction::StashList => {
                ActionCategory::Stash
            }
        }
    }

    /// Short human description shown next to the command
    pub fn description(&self) -> &'static str {
        match self {
            GitAction::AcceptOurs => "Manter suas mudanças",
            GitAction::AcceptTheirs => "Usar versão do repositório",
            GitAction::ContinueMerge => "Após resolver conflitos",
            GitAction::AbortMerge => "Cancelar operação de merge",
            GitAction::CreateBranch { .. } => "Criar e trocar para nova branch",
            GitAction::Checkout { .. } => "Mudar para branch selecionada",
            GitAction::DeleteBranch { .. } => "Remover branch do repositório local",
            GitAction::PushBranch { .. } => "Enviar branch para repositório remoto",
            GitAction::ResetSoft => "Desfazer último commit mantendo alterações",
            GitAction::ResetHard => "Desfazer e apagar todas as mudanças",
            GitAction::Amend { .. } => "Modificar mensagem do último commit",
            GitAction::StashPush => "Guardar mudanças sem fazer commit",
            GitAction::StashApply => "Aplicar último stash",
            GitAction::StashList => "Listar todas as alterações salvas",
        }
    }

    /// Resolve a kebab-case action name with the current selection
    pub fn from_name(name: &str, selection: &Selection) -> Option<Self> {
        let branch = selection.branch.clone();
        Some(match name {
            "accept-ours" => GitAction::AcceptOurs,
            "accept-theirs" => GitAction::AcceptTheirs,
            "continue-merge" => GitAction::ContinueMerge,
            "abort-merge" => GitAction::AbortMerge,
            "create-branch" => GitAction::CreateBranch {
                name: selection.new_branch.clone(),
            },
            "checkout" => GitAction::Checkout { branch },
            "delete-branch" => GitAction::DeleteBranch { branch },
            "push-branch" => GitAction::PushBranch { branch },
            "reset-soft" => GitAction::ResetSoft,
            "reset-hard" => GitAction::ResetHard,
            "amend" => GitAction::Amend {
                message: selection.message.clone(),
            },
            "stash-push" => GitAction::StashPush,
            "stash-apply" => GitAction::StashApply,
            "stash-list" => GitAction::StashList,
            _ => return None,
        })
    }
}

/// Current UI selection the commands interpolate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub branch: String,
    pub new_branch: String,
    pub message: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            branch: "main".to_string(),
            new_branch: String::new(),
            message: String::new(),
        }
    }
}

pub const ACTION_NAMES: [&str; 14] = [
    "accept-ours",
    "accept-theirs",
    "continue-merge",
    "abort-merge",
    "create-branch",
    "checkout",
    "delete-branch",
    "push-branch",
    "reset-soft",
    "reset-hard",
    "amend",
    "stash-push",
    "stash-apply",
    "stash-list",
];

/// Every action for the given selection, in catalog order
pub fn catalog(selection: &Selection) -> Vec<GitAction> {
    ACTION_NAMES
        .iter()
        .filter_map(|name| GitAction::from_name(name, selection))
        .collect()
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}
