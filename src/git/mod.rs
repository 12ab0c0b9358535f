//! Git operations abstraction layer
//!
//! The release pipeline only needs three read-only questions answered by
//! version control, captured by the [Repository] trait:
//!
//! - which tags are merged into a branch,
//! - which commits on one ref have no equivalent on another,
//! - what the full message of a commit is.
//!
//! Implementations:
//!
//! - [cli::GitCli]: shells out to the `git` binary and parses its output
//! - [repository::Git2Repository]: answers the same questions in-process with `git2`
//! - [mock::MockRepository]: an in-memory fake for tests
//!
//! ```rust
//! # use deinde::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.list_merged_tags("master")?;
//! let commits = repo.list_new_commits("HEAD", "v1.0.0")?;
//! for commit in &commits {
//!     println!("{}", repo.fetch_message(commit)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;

pub use cli::GitCli;
pub use mock::MockRepository;
pub use repository::Git2Repository;

pub use crate::error::{GitError, GitResult};

use crate::domain::CommitRef;

/// Read-only version-control operations used by the release pipeline
pub trait Repository {
    /// List the names of all tags merged into `branch`
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names whose commit is reachable from the branch
    /// * `Err` - If the branch does not resolve or the query fails
    fn list_merged_tags(&self, branch: &str) -> GitResult<Vec<String>>;

    /// List commits reachable from `ahead` with no equivalent patch reachable from `behind`
    ///
    /// Commits are returned oldest first, the order `git cherry` reports them.
    ///
    /// # Arguments
    /// * `ahead` - Commit-ish holding the unreleased work (e.g. "HEAD")
    /// * `behind` - Commit-ish of the last release (e.g. "v1.2.3")
    fn list_new_commits(&self, ahead: &str, behind: &str) -> GitResult<Vec<CommitRef>>;

    /// Fetch the full message (subject and body) of a commit
    fn fetch_message(&self, commit: &CommitRef) -> GitResult<String>;
}
