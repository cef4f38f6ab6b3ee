//! Supported languages and the default-language fallback rule.
//!
//! To add a language, append it to [`SUPPORTED_LANGUAGES`] and add a fully
//! populated table for it to every text group. [`DEFAULT_LANGUAGE`] must
//! always stay in the list.

use tracing::debug;

/// A selectable language: short code plus the label shown in the
/// language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages offered to users, in display order.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language {
        code: "br",
        name: "🇧🇷 Português Brasileiro",
    },
    Language {
        code: "en",
        name: "🇬🇧 English",
    },
];

/// Used whenever a requested code is not supported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Whether `code` is one of [`SUPPORTED_LANGUAGES`].
pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

/// Look up a supported language by code.
pub fn find(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

/// Display name for `code`, if supported.
pub fn display_name(code: &str) -> Option<&'static str> {
    find(code).map(|l| l.name)
}

/// Resolve a requested code against [`DEFAULT_LANGUAGE`].
pub fn resolve(code: &str) -> &'static str {
    resolve_or(code, DEFAULT_LANGUAGE)
}

/// Resolve a requested code, falling back to `default` when unsupported.
///
/// Never fails. If `default` is itself unsupported the built-in
/// [`DEFAULT_LANGUAGE`] is used instead.
pub fn resolve_or(code: &str, default: &str) -> &'static str {
    if let Some(lang) = find(code) {
        return lang.code;
    }
    let fallback = find(default).map_or(DEFAULT_LANGUAGE, |l| l.code);
    debug!("language '{code}' not supported, using '{fallback}'");
    fallback
}
