use support_texts::TextError;
use thiserror::Error;

/// Top-level error type for the support bot.
#[derive(Debug, Error)]
pub enum SupportError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Text lookup, rendering or validation error.
    #[error("text error: {0}")]
    Texts(#[from] TextError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_error_converts() {
        let err: SupportError = TextError::UnresolvedPlaceholder {
            name: "id".to_string(),
        }
        .into();
        assert!(matches!(err, SupportError::Texts(_)));
        assert_eq!(err.to_string(), "text error: unresolved placeholder '{id}'");
    }
}
