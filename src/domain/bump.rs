use std::fmt;

/// Severity of the next version change.
///
/// Ordered `None < Patch < Minor < Major`, so aggregating several commits is
/// just the maximum. `None` is the identity of that maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BumpLevel {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Combine two levels, keeping the more severe one
    pub fn combine(self, other: BumpLevel) -> BumpLevel {
        self.max(other)
    }

    /// Whether this level warrants a new release
    pub fn is_release(self) -> bool {
        self != BumpLevel::None
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpLevel::None => "none",
            BumpLevel::Patch => "patch",
            BumpLevel::Minor => "minor",
            BumpLevel::Major => "major",
        };
        f.write_str(name)
    }
}

impl FromIterator<BumpLevel> for BumpLevel {
    fn from_iter<I: IntoIterator<Item = BumpLevel>>(iter: I) -> Self {
        iter.into_iter().fold(BumpLevel::None, BumpLevel::combine)
    }
}
