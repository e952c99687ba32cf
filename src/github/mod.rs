//! Pull-request data fetching.
//!
//! The engine only consumes a materialized, order-preserving sequence of
//! [crate::domain::CommitRecord]s. This module provides the trait boundary
//! that produces one, with a real GitHub REST implementation and an
//! in-memory mock for tests.

pub mod client;
pub mod mock;

pub use client::GithubClient;
pub use mock::MockSource;

use crate::domain::CommitRecord;
use crate::error::Result;

/// Source of a pull request's commits.
///
/// Implementations must deliver commits in the order the API lists them and
/// materialize per-file diffs before handing them to the engine; the engine
/// never performs I/O itself.
pub trait PullRequestSource {
    /// All commits of the pull request, oldest first, with file diffs
    /// materialized for every non-merge commit.
    fn pull_request_commits(&self) -> Result<Vec<CommitRecord>>;
}
