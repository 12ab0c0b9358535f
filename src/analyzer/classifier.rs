use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::config::KeywordConfig;
use crate::domain::{BumpLevel, CommitMessage};
use crate::error::{DeindeError, Result};

/// Maps commit messages to the bump level they imply
#[derive(Debug)]
pub struct BumpClassifier {
    token: Regex,
    major: HashSet<String>,
    minor: HashSet<String>,
    patch: HashSet<String>,
    note: Vec<String>,
}

impl BumpClassifier {
    /// Build a classifier from keyword tables.
    ///
    /// Fails with [`DeindeError::ClassifierConfig`] if the token pattern does
    /// not compile or a keyword is empty (an empty note keyword would match
    /// every message).
    pub fn new(config: &KeywordConfig) -> Result<Self> {
        let token = Regex::new(&config.token_pattern).map_err(|e| {
            DeindeError::classifier_config(format!(
                "token pattern '{}' is invalid: {}",
                config.token_pattern, e
            ))
        })?;

        let tables = [
            ("major", &config.major),
            ("minor", &config.minor),
            ("patch", &config.patch),
            ("note", &config.note),
        ];
        for (table, keywords) in tables {
            if keywords.iter().any(|keyword| keyword.is_empty()) {
                return Err(DeindeError::classifier_config(format!(
                    "empty keyword in {} keywords",
                    table
                )));
            }
        }

        Ok(BumpClassifier {
            token,
            major: config.major.iter().cloned().collect(),
            minor: config.minor.iter().cloned().collect(),
            patch: config.patch.iter().cloned().collect(),
            note: config.note.clone(),
        })
    }

    /// First token of the subject, e.g. `feat` for `feat(api): add X`
    pub fn subject_token<'a>(&self, subject: &'a str) -> Option<&'a str> {
        self.token.find(subject).map(|m| m.as_str())
    }

    /// Classify a single commit message
    pub fn classify_message(&self, text: &str) -> BumpLevel {
        let message = CommitMessage::parse(text);

        let subject_level = match self.subject_token(&message.subject) {
            Some(token) if self.major.contains(token) => BumpLevel::Major,
            Some(token) if self.minor.contains(token) => BumpLevel::Minor,
            Some(token) if self.patch.contains(token) => BumpLevel::Patch,
            _ => BumpLevel::None,
        };

        let note_level = if self.has_note_keyword(&message.note) {
            BumpLevel::Major
        } else {
            BumpLevel::None
        };

        let level = subject_level.combine(note_level);
        debug!(subject = %message.subject, %level, "Classified commit");
        level
    }

    fn has_note_keyword(&self, note: &str) -> bool {
        self.note.iter().any(|k| note.contains(k.as_str()))
    }

    /// Highest bump level implied by all messages, `None` for an empty list
    pub fn classify<S: AsRef<str>>(&self, messages: &[S]) -> BumpLevel {
        messages
            .iter()
            .map(|message| self.classify_message(message.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> BumpClassifier {
        BumpClassifier::new(&KeywordConfig::default()).unwrap()
    }

    #[test]
    fn test_classify_minor() {
        let messages = vec!["feat: new feature", "fix: bug fix"];
        assert_eq!(classifier().classify(&messages), BumpLevel::Minor);
    }

    #[test]
    fn test_classify_patch() {
        let messages = vec!["fix: bug fix", "refactor: code cleanup"];
        assert_eq!(classifier().classify(&messages), BumpLevel::Patch);
    }

    #[test]
    fn test_classify_no_keywords() {
        let messages = vec![
            "docs: update readme",
            "chore: update deps",
            "style: format code",
            "test: add tests",
        ];
        assert_eq!(classifier().classify(&messages), BumpLevel::None);
    }

    #[test]
    fn test_classify_empty_list() {
        let messages: Vec<String> = Vec::new();
        assert_eq!(classifier().classify(&messages), BumpLevel::None);
    }

    #[test]
    fn test_classify_empty_message() {
        assert_eq!(classifier().classify_message(""), BumpLevel::None);
    }

    #[test]
    fn test_scope_does_not_hide_type() {
        assert_eq!(
            classifier().classify_message("feat(auth): add oauth support"),
            BumpLevel::Minor
        );
    }

    #[test]
    fn test_subject_keyword_is_exact_match() {
        let classifier = classifier();
        assert_eq!(classifier.subject_token("fixes a bug"), Some("fixes"));
        assert_eq!(classifier.classify_message("fixes a bug"), BumpLevel::None);
        assert_eq!(classifier.classify_message("feature: x"), BumpLevel::None);
    }

    #[test]
    fn test_subject_keyword_is_case_sensitive() {
        assert_eq!(classifier().classify_message("Fix: typo"), BumpLevel::None);
    }

    #[test]
    fn test_token_found_anywhere_in_subject() {
        let classifier = classifier();
        assert_eq!(classifier.subject_token("  [fix] crash"), Some("fix"));
        assert_eq!(
            classifier.classify_message("  [fix] crash"),
            BumpLevel::Patch
        );
        assert_eq!(classifier.subject_token("1234"), None);
    }

    #[test]
    fn test_breaking_change_note_is_major() {
        let message = "fix: rename API field\n\nBREAKING CHANGE: field changed from X to Y";
        assert_eq!(classifier().classify_message(message), BumpLevel::Major);
    }

    #[test]
    fn test_note_keyword_is_substring_match() {
        let message = "chore: tidy\n\nthis is a BREAKING CHANGE for callers";
        assert_eq!(classifier().classify_message(message), BumpLevel::Major);
    }

    #[test]
    fn test_note_keyword_spanning_lines() {
        let message = "docs: explain\n\nThis is a BREAKING\nCHANGE indeed";
        assert_eq!(classifier().classify_message(message), BumpLevel::Major);
    }

    #[test]
    fn test_note_keyword_in_subject_is_ignored() {
        let message = "docs: describe BREAKING CHANGE policy";
        assert_eq!(classifier().classify_message(message), BumpLevel::None);
    }

    #[test]
    fn test_bang_marker_is_not_major_by_default() {
        assert_eq!(
            classifier().classify_message("feat!: redesign"),
            BumpLevel::Minor
        );
    }

    #[test]
    fn test_major_subject_keyword_from_config() {
        let config = KeywordConfig {
            major: vec!["breaking".to_string()],
            ..KeywordConfig::default()
        };
        let classifier = BumpClassifier::new(&config).unwrap();
        let messages = vec!["feat: a", "breaking: remove b"];
        assert_eq!(classifier.classify(&messages), BumpLevel::Major);
    }

    #[test]
    fn test_order_independence() {
        let classifier = classifier();
        let forward = vec!["fix: a", "feat: b", "docs: c"];
        let backward = vec!["docs: c", "feat: b", "fix: a"];
        let level = classifier.classify(&forward);
        assert_eq!(level, classifier.classify(&backward));
        assert_eq!(level, BumpLevel::Minor);
    }

    #[test]
    fn test_major_never_downgraded_by_later_commits() {
        let messages = vec!["fix: a\n\nBREAKING CHANGES: x", "fix: b", "feat: c"];
        assert_eq!(classifier().classify(&messages), BumpLevel::Major);
    }

    #[test]
    fn test_invalid_token_pattern() {
        let config = KeywordConfig {
            token_pattern: "[a-z".to_string(),
            ..KeywordConfig::default()
        };
        let err = BumpClassifier::new(&config).unwrap_err();
        assert!(matches!(err, DeindeError::ClassifierConfig(_)));
    }

    #[test]
    fn test_empty_note_keyword_rejected() {
        let config = KeywordConfig {
            note: vec![String::new()],
            ..KeywordConfig::default()
        };
        let err = BumpClassifier::new(&config).unwrap_err();
        assert!(err.to_string().contains("note"));
    }

    #[test]
    fn test_real_release_cycle() {
        let messages = vec![
            "feat(api): add user list endpoint",
            "feat(auth): add role-based access",
            "fix(ui): modal alignment",
            "docs: update api docs",
        ];
        assert_eq!(classifier().classify(&messages), BumpLevel::Minor);
    }
}
