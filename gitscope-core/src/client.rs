//! Minimal async client for the GitHub REST endpoints the dashboard reads.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::GithubConfig;
use crate::error::FeedError;
use crate::github::{GitHubCommit, GitHubContributor, GitHubRepository, LanguageStats};

/// Repository info, commits, contributors and languages fetched together
#[derive(Debug, Clone)]
pub struct RepoSnapshot {
    pub repository: GitHubRepository,
    pub commits: Vec<GitHubCommit>,
    pub contributors: Vec<GitHubContributor>,
    pub languages: LanguageStats,
}

pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
    per_page: u32,
    timeout: Duration,
}

impl GitHubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("gitscope"));
        if let Some(token) = config.token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            per_page: config.per_page,
            timeout,
        })
    }

    pub async fn repository(&self, owner: &str, repo: &str) -> Result<GitHubRepository, FeedError> {
        self.get(&format!("/repos/{owner}/{repo}")).await
    }

    pub async fn commits(&self, owner: &str, repo: &str, page: u32) -> Result<Vec<GitHubCommit>, FeedError> {
        self.get(&format!(
            "/repos/{owner}/{repo}/commits?page={page}&per_page={}",
            self.per_page
        ))
        .await
    }

    /// Newest-first commits across as many pages as `limit` needs.
    /// Stops early when a page comes back short.
    pub async fn commit_window(&self, owner: &str, repo: &str, limit: usize) -> Result<Vec<GitHubCommit>, FeedError> {
        let per_page = self.per_page.max(1) as usize;
        let mut commits = Vec::new();
        let mut page = 1;
        while commits.len() < limit {
            let batch = self.commits(owner, repo, page).await?;
            let last = batch.len() < per_page;
            commits.extend(batch);
            if last {
                break;
            }
            page += 1;
        }
        commits.truncate(limit);
        debug!(owner, repo, pages = page, commits = commits.len(), "fetched commit window");
        Ok(commits)
    }

    pub async fn contributors(&self, owner: &str, repo: &str) -> Result<Vec<GitHubContributor>, FeedError> {
        self.get(&format!("/repos/{owner}/{repo}/contributors")).await
    }

    pub async fn languages(&self, owner: &str, repo: &str) -> Result<LanguageStats, FeedError> {
        self.get(&format!("/repos/{owner}/{repo}/languages")).await
    }

    /// Fetch repository info, up to `limit` commits, contributors and
    /// languages concurrently. The whole join is bounded by the configured
    /// timeout.
    pub async fn snapshot(&self, owner: &str, repo: &str, limit: usize) -> Result<RepoSnapshot, FeedError> {
        let fetch = async {
            tokio::try_join!(
                self.repository(owner, repo),
                self.commit_window(owner, repo, limit),
                self.contributors(owner, repo),
                self.languages(owner, repo),
            )
        };

        let (repository, commits, contributors, languages) = tokio::time::timeout(self.timeout, fetch)
            .await
            .map_err(|_| FeedError::Timeout(self.timeout.as_secs()))??;

        info!(
            owner,
            repo,
            commits = commits.len(),
            contributors = contributors.len(),
            "fetched repository snapshot"
        );

        Ok(RepoSnapshot {
            repository,
            commits,
            contributors,
            languages,
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FeedError> {
        let url = format!("{}{}", self.api_base, endpoint);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json().await?)
    }
}
