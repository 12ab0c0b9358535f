use regex::Regex;
use semver::Version;
use tracing::{debug, info};

use crate::config::ReleaseConfig;
use crate::error::{DeindeError, Result};
use crate::git::Repository;

/// Finds the latest released version on a branch from its tag names
#[derive(Debug)]
pub struct VersionResolver {
    version_pattern: Regex,
}

impl VersionResolver {
    /// Create a resolver using the configured version pattern
    pub fn new(config: &ReleaseConfig) -> Result<Self> {
        let version_pattern = Regex::new(&config.version_pattern).map_err(|e| {
            DeindeError::config(format!(
                "version pattern '{}' is invalid: {}",
                config.version_pattern, e
            ))
        })?;

        Ok(VersionResolver { version_pattern })
    }

    /// Extract the release version embedded in a tag name.
    ///
    /// Tags without a version substring, or whose substring is not a valid
    /// semantic version, are not release tags: they yield `None` and are
    /// skipped rather than failing the run. So are versions with a component
    /// at `u64::MAX`, which cannot be bumped.
    pub fn version_from_tag(&self, tag: &str) -> Option<Version> {
        let Some(found) = self.version_pattern.find(tag) else {
            debug!(%tag, "Skipping tag without a version");
            return None;
        };

        let version = match Version::parse(found.as_str()) {
            Ok(version) => version,
            Err(e) => {
                debug!(%tag, error = %e, "Skipping tag with unparsable version");
                return None;
            }
        };

        let components = [version.major, version.minor, version.patch];
        if components.contains(&u64::MAX) {
            debug!(%tag, %version, "Skipping tag with a version that cannot be bumped");
            return None;
        }

        Some(version)
    }

    /// Highest release version among the given tag names
    pub fn latest_from_tags<S: AsRef<str>>(&self, tags: &[S]) -> Option<Version> {
        tags.iter()
            .filter_map(|tag| self.version_from_tag(tag.as_ref()))
            .max()
    }

    /// Resolve the highest version tagged on commits merged into `branch`.
    ///
    /// # Returns
    /// * `Ok(Version)` - The latest released version
    /// * `Err(NoReleaseFound)` - If the tag query fails or no tag carries a version
    pub fn latest_release<R: Repository + ?Sized>(
        &self,
        repo: &R,
        branch: &str,
    ) -> Result<Version> {
        let tags = repo
            .list_merged_tags(branch)
            .map_err(|e| DeindeError::no_release(branch, e.to_string()))?;
        debug!(%branch, count = tags.len(), "Listed merged tags");

        let latest = self
            .latest_from_tags(&tags)
            .ok_or_else(|| DeindeError::no_release(branch, "no version tags found"))?;

        info!(%branch, version = %latest, "Resolved last release");
        Ok(latest)
    }
}
