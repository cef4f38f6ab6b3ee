use thiserror::Error;

/// Errors raised while resolving or rendering localized text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The key is not defined for the resolved language.
    #[error("missing text key '{key}' for language '{language}' in group '{group}'")]
    MissingKey {
        group: &'static str,
        language: &'static str,
        key: String,
    },

    /// A `{name}` token had no matching argument.
    #[error("unresolved placeholder '{{{name}}}'")]
    UnresolvedPlaceholder { name: String },

    /// A `{` without a closing `}` (byte offset into the template).
    #[error("malformed template: unterminated placeholder at byte {position}")]
    MalformedTemplate { position: usize },

    /// The table failed validation.
    #[error("text group '{group}' is inconsistent: {}", .issues.join("; "))]
    Inconsistent {
        group: &'static str,
        issues: Vec<String>,
    },
}
