//! Release analysis stages: find the last release, collect what is new
//! since then, and decide how far the version moves.

pub mod classifier;
pub mod history;
pub mod resolver;

pub use classifier::BumpClassifier;
pub use history::{enumerate_commits, fetch_messages};
pub use resolver::VersionResolver;
