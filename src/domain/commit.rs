use std::fmt;

/// Opaque identifier of a single commit, as reported by the repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitRef(String);

impl CommitRef {
    pub fn new(id: impl Into<String>) -> Self {
        CommitRef(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommitRef {
    fn from(id: &str) -> Self {
        CommitRef::new(id)
    }
}

/// A commit message split into its subject line and note text.
///
/// The note text is every line after the subject joined with a single space,
/// so footer keywords are found even when they straddle a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub subject: String,
    pub note: String,
}

impl CommitMessage {
    /// Split raw message text into subject and note text
    pub fn parse(text: &str) -> Self {
        let mut lines = text.split('\n');
        let subject = lines.next().unwrap_or_default().to_string();
        let note = lines.collect::<Vec<_>>().join(" ");

        CommitMessage { subject, note }
    }
}
