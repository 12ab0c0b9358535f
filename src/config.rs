use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::str::FromStr;

use crate::error::{DeindeError, Result};

/// Represents the complete configuration for deinde.
///
/// Contains the keyword tables, release tag conventions, and the git backend.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub keywords: KeywordConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_patch_keywords() -> Vec<String> {
    vec!["fix".to_string()]
}

fn default_minor_keywords() -> Vec<String> {
    vec!["feat".to_string()]
}

/// Returns the default list of breaking change notes.
fn default_note_keywords() -> Vec<String> {
    vec![
        "BREAKING CHANGE".to_string(),
        "BREAKING CHANGES".to_string(),
    ]
}

fn default_token_pattern() -> String {
    "[a-zA-Z]+".to_string()
}

/// Keyword tables used to classify commit messages.
///
/// Subject keywords are compared for equality with the first token matched by
/// `token_pattern` in the subject line. Note keywords are searched for as
/// substrings of the message body. No subject keyword triggers a major bump
/// by default; only a breaking change note does.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct KeywordConfig {
    #[serde(default)]
    pub major: Vec<String>,

    #[serde(default = "default_minor_keywords")]
    pub minor: Vec<String>,

    #[serde(default = "default_patch_keywords")]
    pub patch: Vec<String>,

    #[serde(default = "default_note_keywords")]
    pub note: Vec<String>,

    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        KeywordConfig {
            major: Vec::new(),
            minor: default_minor_keywords(),
            patch: default_patch_keywords(),
            note: default_note_keywords(),
            token_pattern: default_token_pattern(),
        }
    }
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_version_pattern() -> String {
    r"[0-9]+\.[0-9]+\.[0-9]+".to_string()
}

/// How release tags are named.
///
/// `version_pattern` picks the version out of a tag name; `tag_prefix` is put
/// in front of a version to name its tag (`1.2.3` -> `v1.2.3`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default = "default_version_pattern")]
    pub version_pattern: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_prefix: default_tag_prefix(),
            version_pattern: default_version_pattern(),
        }
    }
}

/// Which implementation answers version-control queries
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run the `git` executable
    #[default]
    Cli,
    /// Use libgit2 in-process
    Libgit2,
}

impl FromStr for Backend {
    type Err = DeindeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cli" | "git" => Ok(Backend::Cli),
            "libgit2" | "git2" => Ok(Backend::Libgit2),
            other => Err(DeindeError::config(format!(
                "Unknown git backend '{}' (expected 'cli' or 'libgit2')",
                other
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Cli => write!(f, "cli"),
            Backend::Libgit2 => write!(f, "libgit2"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct GitConfig {
    #[serde(default)]
    pub backend: Backend,
}

/// Loads configuration from file or returns defaults.
///
/// Only an explicitly given path is read; without one the built-in keyword
/// tables are used.
///
/// # Arguments
/// * `config_path` - Optional path to a TOML configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = config_path else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(path)
        .map_err(|e| DeindeError::config(format!("Cannot read '{}': {}", path, e)))?;

    toml::from_str(&config_str)
        .map_err(|e| DeindeError::config(format!("Cannot parse '{}': {}", path, e.message())))
}
