//! Collecting the unreleased commits and their messages.

use tracing::debug;

use crate::domain::CommitRef;
use crate::error::{DeindeError, Result};
use crate::git::Repository;

/// List commits on `ahead` whose patch is not already in `behind`, oldest first
pub fn enumerate_commits<R: Repository + ?Sized>(
    repo: &R,
    ahead: &str,
    behind: &str,
) -> Result<Vec<CommitRef>> {
    let commits = repo
        .list_new_commits(ahead, behind)
        .map_err(|source| DeindeError::CommitListUnavailable {
            ahead: ahead.to_string(),
            behind: behind.to_string(),
            source,
        })?;

    debug!(%ahead, %behind, count = commits.len(), "Enumerated new commits");
    Ok(commits)
}

/// Fetch the message of every commit, in order.
///
/// Stops at the first commit whose message cannot be read; no partial
/// list is returned.
pub fn fetch_messages<R: Repository + ?Sized>(
    repo: &R,
    commits: &[CommitRef],
) -> Result<Vec<String>> {
    commits
        .iter()
        .map(|commit| {
            repo.fetch_message(commit)
                .map_err(|source| DeindeError::MessageFetchFailed {
                    commit: commit.to_string(),
                    source,
                })
        })
        .collect()
}
