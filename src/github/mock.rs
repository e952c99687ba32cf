use crate::domain::{CommitRecord, FileDiff};
use crate::error::Result;
use crate::github::PullRequestSource;

/// In-memory pull-request source for testing without network access.
#[derive(Default)]
pub struct MockSource {
    commits: Vec<CommitRecord>,
}

impl MockSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockSource::default()
    }

    /// Add a commit with file diffs
    pub fn add_commit(
        &mut self,
        sha: impl Into<String>,
        message: impl Into<String>,
        files: Vec<FileDiff>,
    ) -> &mut Self {
        self.commits.push(CommitRecord {
            sha: sha.into(),
            message: message.into(),
            parent_count: 1,
            files: Some(files),
        });
        self
    }

    /// Add a merge commit (two parents, no diffs)
    pub fn add_merge_commit(&mut self, sha: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.commits.push(CommitRecord {
            sha: sha.into(),
            message: message.into(),
            parent_count: 2,
            files: None,
        });
        self
    }
}

impl PullRequestSource for MockSource {
    fn pull_request_commits(&self) -> Result<Vec<CommitRecord>> {
        Ok(self.commits.clone())
    }
}
