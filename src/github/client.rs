use crate::domain::{CommitRecord, FileDiff};
use crate::error::{Result, TagCheckError};
use crate::github::PullRequestSource;
use serde::Deserialize;

/// Default API base; the checks historically ran against a GitHub-API
/// compatible proxy, so the base URL stays injectable.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct ApiParent {
    #[allow(dead_code)]
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ApiCommitMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiCommitSummary {
    sha: String,
    commit: ApiCommitMessage,
    #[serde(default)]
    parents: Vec<ApiParent>,
}

#[derive(Debug, Deserialize)]
struct ApiFile {
    filename: String,
    patch: Option<String>,
    raw_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiCommitDetail {
    files: Option<Vec<ApiFile>>,
}

/// Blocking GitHub REST client for one pull request.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    base_url: String,
    repo_slug: String,
    pull_request: u64,
    token: Option<String>,
    /// Filename fragments whose raw contents are materialized alongside the
    /// patch (the changelog needs its full text to recover the previous
    /// release version).
    raw_content_for: Vec<String>,
}

impl GithubClient {
    pub fn new(
        base_url: impl Into<String>,
        repo_slug: impl Into<String>,
        pull_request: u64,
        token: Option<String>,
        raw_content_for: Vec<String>,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("tagcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(GithubClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            repo_slug: repo_slug.into(),
            pull_request,
            token,
            raw_content_for,
        })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        let resp = request.send()?;
        if !resp.status().is_success() {
            return Err(TagCheckError::api(format!(
                "GET {} returned {}",
                url,
                resp.status()
            )));
        }
        Ok(resp)
    }

    fn list_commit_summaries(&self) -> Result<Vec<ApiCommitSummary>> {
        let mut summaries = Vec::new();
        let mut page = 1u32;
        loop {
            let url = format!(
                "{}/repos/{}/pulls/{}/commits?per_page=100&page={}",
                self.base_url, self.repo_slug, self.pull_request, page
            );
            let batch: Vec<ApiCommitSummary> = self.get(&url)?.json()?;
            let done = batch.len() < 100;
            summaries.extend(batch);
            if done {
                break;
            }
            page += 1;
        }
        Ok(summaries)
    }

    fn commit_files(&self, sha: &str) -> Result<Option<Vec<FileDiff>>> {
        let url = format!("{}/repos/{}/commits/{}", self.base_url, self.repo_slug, sha);
        let detail: ApiCommitDetail = self.get(&url)?.json()?;
        let Some(files) = detail.files else {
            return Ok(None);
        };

        let mut diffs = Vec::with_capacity(files.len());
        for file in files {
            let wants_raw = self
                .raw_content_for
                .iter()
                .any(|fragment| file.filename.contains(fragment));
            let raw_content = match (&file.raw_url, wants_raw && file.patch.is_some()) {
                (Some(raw_url), true) => Some(self.get(raw_url)?.text()?),
                _ => None,
            };
            diffs.push(FileDiff {
                filename: file.filename,
                patch: file.patch,
                raw_content,
            });
        }
        Ok(Some(diffs))
    }
}

impl PullRequestSource for GithubClient {
    fn pull_request_commits(&self) -> Result<Vec<CommitRecord>> {
        let summaries = self.list_commit_summaries()?;
        let mut commits = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let parent_count = summary.parents.len();
            // merge commits are never validated, so their diffs are not worth
            // a round trip
            let files = if parent_count > 1 {
                None
            } else {
                self.commit_files(&summary.sha)?
            };
            commits.push(CommitRecord {
                sha: summary.sha,
                message: summary.commit.message,
                parent_count,
                files,
            });
        }
        Ok(commits)
    }
}
