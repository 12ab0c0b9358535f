use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deinde::cli::{run_release_workflow, ReleaseWorkflowArgs};
use deinde::config::{self, Backend};
use deinde::git::{Git2Repository, GitCli, Repository};
use deinde::ui;

#[derive(clap::Parser)]
#[command(
    name = "deinde",
    version,
    about = "Compute the next semantic version from conventional commits since the last release"
)]
struct Args {
    #[arg(long, default_value = "HEAD", help = "Commit-ish to diff up to")]
    to: String,

    #[arg(
        long,
        default_value = "master",
        help = "Branch used to find the last release tag"
    )]
    release_branch: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Git backend to use: cli or libgit2")]
    backend: Option<Backend>,

    #[arg(
        short = 'C',
        long = "repo",
        default_value = ".",
        help = "Repository directory"
    )]
    repo: PathBuf,

    #[arg(short, long, help = "Log each step and print a summary to stderr")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(Some(tag)) => ui::display_next_version(&tag),
        Ok(None) => {}
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr; stdout only ever carries the version or the error line.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<Option<String>> {
    let config = config::load_config(args.config.as_deref())?;
    let backend = args.backend.unwrap_or(config.git.backend);
    let repo = open_repository(backend, &args.repo)?;

    let workflow_args = ReleaseWorkflowArgs {
        to: args.to.clone(),
        release_branch: args.release_branch.clone(),
    };

    let result = run_release_workflow(repo.as_ref(), &workflow_args, &config)?;

    if args.verbose {
        ui::display_summary(&result, &args.release_branch, &config.release.tag_prefix);
    }

    Ok(result.next_tag(&config.release.tag_prefix))
}

fn open_repository(backend: Backend, path: &Path) -> Result<Box<dyn Repository>> {
    match backend {
        Backend::Cli => Ok(Box::new(GitCli::new(path))),
        Backend::Libgit2 => {
            let repo = Git2Repository::open(path)
                .map_err(|e| anyhow!("Cannot open repository {}: {}", path.display(), e))?;
            Ok(Box::new(repo))
        }
    }
}
