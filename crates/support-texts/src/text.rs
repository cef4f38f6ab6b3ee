//! The localized text store: one text group bound to one resolved language.

use crate::error::TextError;
use crate::localizer::Localizer;
use crate::messages::TEXT_MESSAGES;
use crate::table::TextTable;
use crate::template::{self, PlaceholderPolicy};

/// Resolves message keys to templates in a single, already-resolved language.
///
/// Construction never fails: an unsupported language code silently resolves
/// to the default language. Lookups are pure and repeatable.
///
/// ```
/// use support_texts::{keys, Text};
///
/// let text = Text::messages("fr");
/// assert_eq!(text.language(), "en");
/// assert_eq!(
///     text.get(keys::USER_BLOCKED).unwrap(),
///     "<b>User blocked!</b> Messages from the user are not accepted."
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Text {
    table: &'static TextTable,
    language: &'static str,
    policy: PlaceholderPolicy,
    escape_html: bool,
}

impl Text {
    /// Bind `table` to `code` using the default [`Localizer`] settings.
    pub fn new(table: &'static TextTable, code: &str) -> Self {
        Localizer::default().text(table, code)
    }

    /// Shorthand for the [`TEXT_MESSAGES`] group.
    pub fn messages(code: &str) -> Self {
        Self::new(&TEXT_MESSAGES, code)
    }

    pub(crate) fn from_parts(
        table: &'static TextTable,
        language: &'static str,
        policy: PlaceholderPolicy,
        escape_html: bool,
    ) -> Self {
        Self {
            table,
            language,
            policy,
            escape_html,
        }
    }

    /// The language code actually used for lookups.
    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn table(&self) -> &'static TextTable {
        self.table
    }

    /// Raw template for `key`, placeholders untouched.
    ///
    /// A key missing from the resolved language is a stale or mistyped key;
    /// there is no fallback to another language.
    pub fn get(&self, key: &str) -> Result<&'static str, TextError> {
        self.table
            .lookup(self.language, key)
            .ok_or_else(|| TextError::MissingKey {
                group: self.table.name(),
                language: self.language,
                key: key.to_string(),
            })
    }

    /// Template for `key` with `{name}` tokens filled from `args`.
    ///
    /// Values are HTML-escaped first unless escaping was disabled on the
    /// [`Localizer`].
    pub fn render(&self, key: &str, args: &[(&str, &str)]) -> Result<String, TextError> {
        let template = self.get(key)?;
        if !self.escape_html {
            return template::render(template, args, self.policy);
        }
        let escaped: Vec<(&str, String)> = args
            .iter()
            .map(|(name, value)| (*name, template::escape_html(value)))
            .collect();
        let escaped: Vec<(&str, &str)> = escaped
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        template::render(template, &escaped, self.policy)
    }
}
