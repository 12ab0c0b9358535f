//! Main workflow orchestration logic
//!
//! Runs the release pipeline against any [Repository]: resolve the last
//! release, enumerate the commits since, fetch their messages, classify them
//! and apply the resulting bump. Each stage runs to completion before the
//! next one starts and any error ends the run.

use semver::Version;
use tracing::info;

use crate::analyzer::{enumerate_commits, fetch_messages, BumpClassifier, VersionResolver};
use crate::config::Config;
use crate::domain::{apply_bump, render_version, BumpLevel};
use crate::error::Result;
use crate::git::Repository;

/// Arguments for the release workflow
///
/// Mirrors the CLI flags so the workflow can be called without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Commit-ish holding the unreleased work
    pub to: String,

    /// Branch searched for the last release tag
    pub release_branch: String,
}

impl Default for ReleaseWorkflowArgs {
    fn default() -> Self {
        ReleaseWorkflowArgs {
            to: "HEAD".to_string(),
            release_branch: "master".to_string(),
        }
    }
}

/// Outcome of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The last released version
    pub previous: Version,

    /// Number of commits not yet released
    pub commits: usize,

    /// Bump implied by those commits
    pub bump: BumpLevel,

    /// The next version, `None` when no release is warranted
    pub next: Option<Version>,
}

impl WorkflowResult {
    /// Render the next version as a tag name, if there is one
    pub fn next_tag(&self, prefix: &str) -> Option<String> {
        self.next.as_ref().map(|v| render_version(v, prefix))
    }
}

/// Main release workflow
///
/// The classifier is built before any repository query so that a broken
/// keyword configuration is reported up front.
///
/// # Arguments
///
/// * `repo` - Version-control collaborator
/// * `args` - Workflow arguments (ahead ref and release branch)
/// * `config` - Keyword tables and release tag conventions
pub fn run_release_workflow<R: Repository + ?Sized>(
    repo: &R,
    args: &ReleaseWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let classifier = BumpClassifier::new(&config.keywords)?;
    let resolver = VersionResolver::new(&config.release)?;

    let previous = resolver.latest_release(repo, &args.release_branch)?;
    let released_ref = render_version(&previous, &config.release.tag_prefix);

    let commits = enumerate_commits(repo, &args.to, &released_ref)?;
    let messages = fetch_messages(repo, &commits)?;

    let bump = classifier.classify(&messages);
    let next = apply_bump(&previous, bump);

    info!(
        previous = %previous,
        commits = commits.len(),
        %bump,
        "Analyzed unreleased commits"
    );

    Ok(WorkflowResult {
        previous,
        commits: commits.len(),
        bump,
        next,
    })
}
