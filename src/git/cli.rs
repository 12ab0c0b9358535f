use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::domain::CommitRef;
use crate::error::{GitError, GitResult};

/// Repository backed by the `git` executable.
///
/// Each operation runs one git command in the repository directory and
/// parses its text output. Nothing is written to the repository.
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    /// Create a collaborator that runs git inside `work_dir`
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        GitCli {
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> GitResult<String> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, dir = %self.work_dir.display(), "Running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                command,
                status: output.status.code().unwrap_or(-1),
                stderr: single_line(&stderr),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl super::Repository for GitCli {
    fn list_merged_tags(&self, branch: &str) -> GitResult<Vec<String>> {
        check_revision(branch)?;
        let output = self.run(&["tag", "--merged", branch])?;
        Ok(parse_tag_list(&output))
    }

    fn list_new_commits(&self, ahead: &str, behind: &str) -> GitResult<Vec<CommitRef>> {
        check_revision(ahead)?;
        check_revision(behind)?;
        let output = self.run(&["cherry", behind, ahead])?;
        Ok(parse_cherry_output(&output))
    }

    fn fetch_message(&self, commit: &CommitRef) -> GitResult<String> {
        check_revision(commit.as_str())?;
        self.run(&["show", "-s", "--format=%B", commit.as_str()])
    }
}

/// Refuse revisions git would read as an option
fn check_revision(revision: &str) -> GitResult<()> {
    if revision.is_empty() || revision.starts_with('-') {
        return Err(GitError::UnknownRef(revision.to_string()));
    }
    Ok(())
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse `git tag` output: one tag name per line, blank lines dropped
pub fn parse_tag_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `git cherry` output into the commits that are new on the ahead side.
///
/// Lines look like `+ <sha>` (no equivalent upstream) or `- <sha>` (an
/// equivalent patch is already upstream). Only `+` lines are kept, with the
/// marker and following whitespace stripped. Order is preserved.
pub fn parse_cherry_output(output: &str) -> Vec<CommitRef> {
    output
        .lines()
        .filter_map(|line| line.trim_end().strip_prefix('+'))
        .map(str::trim_start)
        .filter(|id| !id.is_empty())
        .map(CommitRef::new)
        .collect()
}
