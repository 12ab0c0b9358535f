use thiserror::Error;

/// Errors reported by a version-control collaborator
#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("git operation failed: {0}")]
    Git2(#[from] git2::Error),

    #[error("unknown revision '{0}'")]
    UnknownRef(String),
}

/// Result type for collaborator operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Unified error type for deinde operations
#[derive(Error, Debug)]
pub enum DeindeError {
    #[error("Could not determine last release on '{branch}': {reason}")]
    NoReleaseFound { branch: String, reason: String },

    #[error("Could not list commits from {ahead} not in {behind}: {source}")]
    CommitListUnavailable {
        ahead: String,
        behind: String,
        #[source]
        source: GitError,
    },

    #[error("Could not fetch message for commit {commit}: {source}")]
    MessageFetchFailed {
        commit: String,
        #[source]
        source: GitError,
    },

    #[error("Invalid classifier configuration: {0}")]
    ClassifierConfig(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in deinde
pub type Result<T> = std::result::Result<T, DeindeError>;

impl DeindeError {
    /// Create a no-release error for a branch
    pub fn no_release(branch: impl Into<String>, reason: impl Into<String>) -> Self {
        DeindeError::NoReleaseFound {
            branch: branch.into(),
            reason: reason.into(),
        }
    }

    /// Create a classifier configuration error with context
    pub fn classifier_config(msg: impl Into<String>) -> Self {
        DeindeError::ClassifierConfig(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DeindeError::Config(msg.into())
    }
}
