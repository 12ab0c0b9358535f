//! Applying a bump level to a released version.

use semver::Version;

use crate::domain::BumpLevel;

/// Produce the version that follows `version` for the given bump level.
///
/// Returns `None` for [`BumpLevel::None`]: no release is warranted. Also
/// `None` when the bumped component is already `u64::MAX`.
/// Lower components are reset and pre-release/build metadata is dropped:
/// - **Major**: major + 1, minor = 0, patch = 0
/// - **Minor**: minor + 1, patch = 0
/// - **Patch**: patch + 1
pub fn apply_bump(version: &Version, level: BumpLevel) -> Option<Version> {
    match level {
        BumpLevel::None => None,
        BumpLevel::Patch => {
            let patch = version.patch.checked_add(1)?;
            Some(Version::new(version.major, version.minor, patch))
        }
        BumpLevel::Minor => {
            let minor = version.minor.checked_add(1)?;
            Some(Version::new(version.major, minor, 0))
        }
        BumpLevel::Major => {
            let major = version.major.checked_add(1)?;
            Some(Version::new(major, 0, 0))
        }
    }
}

/// Render a version as a tag-style string, e.g. `v1.2.3`
pub fn render_version(version: &Version, prefix: &str) -> String {
    format!("{}{}", prefix, version)
}
