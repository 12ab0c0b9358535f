//! Command-line workflow, kept apart from argument parsing

pub mod orchestration;

pub use orchestration::{run_release_workflow, ReleaseWorkflowArgs, WorkflowResult};
