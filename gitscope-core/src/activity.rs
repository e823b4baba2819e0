//! Aggregations behind the activity, contributor and language charts.

use chrono::NaiveDate;
use graph::CommitRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::github::{GitHubContributor, LanguageStats};

/// Commit activity for one calendar day (UTC)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub commits: usize,
    pub additions: u64,
    pub deletions: u64,
    /// Distinct author names, sorted
    pub authors: Vec<String>,
    pub net_changes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percent: f64,
}

#[derive(Default)]
struct DayTotals {
    commits: usize,
    additions: u64,
    deletions: u64,
    authors: BTreeSet<String>,
}

/// Group commits by author date, oldest day first
pub fn daily_activity(commits: &[CommitRecord]) -> Vec<DailyActivity> {
    let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();
    for commit in commits {
        let day = days.entry(commit.author.date.date_naive()).or_default();
        day.commits += 1;
        if let Some(stats) = commit.stats {
            day.additions += stats.additions;
            day.deletions += stats.deletions;
        }
        day.authors.insert(commit.author.name.clone());
    }

    days.into_iter()
        .map(|(date, day)| DailyActivity {
            date,
            commits: day.commits,
            additions: day.additions,
            deletions: day.deletions,
            net_changes: day.additions as i64 - day.deletions as i64,
            authors: day.authors.into_iter().collect(),
        })
        .collect()
}

/// Languages by byte count, largest first
pub fn language_breakdown(languages: &LanguageStats) -> Vec<LanguageShare> {
    let total: u64 = languages.values().sum();
    let mut shares: Vec<LanguageShare> = languages
        .iter()
        .map(|(language, &bytes)| LanguageShare {
            language: language.clone(),
            bytes,
            percent: if total == 0 {
                0.0
            } else {
                bytes as f64 * 100.0 / total as f64
            },
        })
        .collect();
    shares.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.language.cmp(&b.language)));
    shares
}

/// The `n` contributors with most contributions
pub fn top_contributors(contributors: &[GitHubContributor], n: usize) -> Vec<&GitHubContributor> {
    let mut sorted: Vec<&GitHubContributor> = contributors.iter().collect();
    sorted.sort_by(|a, b| {
        b.contributions
            .cmp(&a.contributions)
            .then_with(|| a.login.cmp(&b.login))
    });
    sorted.truncate(n);
    sorted
}
