//! Domain logic - pure release rules independent of git operations

pub mod bump;
pub mod commit;
pub mod version;

pub use bump::BumpLevel;
pub use commit::{CommitMessage, CommitRef};
pub use version::{apply_bump, render_version};
