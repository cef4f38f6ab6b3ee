//! Consistency checks over a [`TextTable`], run once at startup.
//!
//! A key missing from one language only fails when that language is
//! actually requested, so the bot validates every group before serving.

use std::fmt;

use tracing::warn;

use crate::error::TextError;
use crate::language::{self, DEFAULT_LANGUAGE};
use crate::table::TextTable;
use crate::template;

/// A single problem found in a text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnsupportedLanguage {
        language: &'static str,
    },
    DuplicateLanguage {
        language: &'static str,
    },
    MissingDefaultLanguage {
        language: &'static str,
    },
    MissingKey {
        language: &'static str,
        key: &'static str,
    },
    DuplicateKey {
        language: &'static str,
        key: &'static str,
    },
    EmptyTemplate {
        language: &'static str,
        key: &'static str,
    },
    PlaceholderMismatch {
        language: &'static str,
        key: &'static str,
        expected: Vec<&'static str>,
        found: Vec<&'static str>,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLanguage { language } => {
                write!(f, "language '{language}' is not a supported language")
            }
            Self::DuplicateLanguage { language } => {
                write!(f, "language '{language}' is defined more than once")
            }
            Self::MissingDefaultLanguage { language } => {
                write!(f, "default language '{language}' has no table")
            }
            Self::MissingKey { language, key } => {
                write!(f, "key '{key}' is missing for '{language}'")
            }
            Self::DuplicateKey { language, key } => {
                write!(f, "key '{key}' is defined more than once for '{language}'")
            }
            Self::EmptyTemplate { language, key } => {
                write!(f, "key '{key}' is empty for '{language}'")
            }
            Self::PlaceholderMismatch {
                language,
                key,
                expected,
                found,
            } => write!(
                f,
                "key '{key}' for '{language}' has placeholders [{}], expected [{}]",
                found.join(", "),
                expected.join(", ")
            ),
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    group: &'static str,
    key_count: usize,
    issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// Number of distinct keys across all languages.
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_result(self) -> Result<(), TextError> {
        if self.issues.is_empty() {
            return Ok(());
        }
        Err(TextError::Inconsistent {
            group: self.group,
            issues: self.issues.iter().map(ToString::to_string).collect(),
        })
    }
}

/// Validate `table` against [`DEFAULT_LANGUAGE`].
pub fn validate(table: &TextTable) -> ValidationReport {
    validate_with_default(table, DEFAULT_LANGUAGE)
}

/// Check that:
/// - every language in the table is supported and appears once,
/// - `default_language` has a table (an unsupported default is resolved
///   to the built-in one first),
/// - every language defines the same keys, once each, with non-empty text,
/// - each key uses the same placeholder names in every language.
pub fn validate_with_default(table: &TextTable, default_language: &str) -> ValidationReport {
    let default_language = language::resolve(default_language);
    let mut issues = Vec::new();

    let mut seen_languages: Vec<&'static str> = Vec::new();
    for code in table.languages() {
        if seen_languages.contains(&code) {
            issues.push(Issue::DuplicateLanguage { language: code });
            continue;
        }
        seen_languages.push(code);
        if !language::is_supported(code) {
            issues.push(Issue::UnsupportedLanguage { language: code });
        }
    }
    if !table.has_language(default_language) {
        issues.push(Issue::MissingDefaultLanguage {
            language: default_language,
        });
    }

    // Union of keys, in first-seen order.
    let mut all_keys: Vec<&'static str> = Vec::new();
    for code in &seen_languages {
        for key in table.keys(code) {
            if !all_keys.contains(&key) {
                all_keys.push(key);
            }
        }
    }

    for &code in &seen_languages {
        let mut seen_keys: Vec<&'static str> = Vec::new();
        for &(key, text) in table.entries(code).unwrap_or(&[]) {
            if seen_keys.contains(&key) {
                issues.push(Issue::DuplicateKey { language: code, key });
                continue;
            }
            seen_keys.push(key);
            if text.trim().is_empty() {
                issues.push(Issue::EmptyTemplate { language: code, key });
            }
        }
        for &key in &all_keys {
            if !seen_keys.contains(&key) {
                issues.push(Issue::MissingKey {
                    language: code,
                    key,
                });
            }
        }
    }

    // Placeholder parity against the default language, or the first
    // language that has the key.
    for &key in &all_keys {
        let reference = std::iter::once(default_language)
            .chain(seen_languages.iter().copied())
            .find_map(|code| table.lookup(code, key).map(|t| (code, t)));
        let Some((ref_code, ref_text)) = reference else {
            continue;
        };
        let mut expected = template::placeholders(ref_text);
        expected.sort_unstable();

        for &code in &seen_languages {
            if code == ref_code {
                continue;
            }
            let Some(text) = table.lookup(code, key) else {
                continue;
            };
            let mut found = template::placeholders(text);
            found.sort_unstable();
            if found != expected {
                issues.push(Issue::PlaceholderMismatch {
                    language: code,
                    key,
                    expected: expected.clone(),
                    found,
                });
            }
        }
    }

    for issue in &issues {
        warn!("text group '{}': {issue}", table.name());
    }

    ValidationReport {
        group: table.name(),
        key_count: all_keys.len(),
        issues,
    }
}
