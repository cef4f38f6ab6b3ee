//! Localizer settings and the registry of text groups.

use crate::language;
use crate::messages::TEXT_MESSAGES;
use crate::table::TextTable;
use crate::template::PlaceholderPolicy;
use crate::text::Text;

/// Every text group the bot ships with.
static GROUPS: &[&TextTable] = &[&TEXT_MESSAGES];

/// All registered text groups.
pub fn groups() -> &'static [&'static TextTable] {
    GROUPS
}

/// Find a text group by name.
pub fn group(name: &str) -> Option<&'static TextTable> {
    GROUPS.iter().copied().find(|t| t.name() == name)
}

/// Shared settings for producing [`Text`] instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localizer {
    default_language: &'static str,
    policy: PlaceholderPolicy,
    escape_html: bool,
}

impl Default for Localizer {
    fn default() -> Self {
        Self {
            default_language: language::DEFAULT_LANGUAGE,
            policy: PlaceholderPolicy::default(),
            escape_html: true,
        }
    }
}

impl Localizer {
    /// `default_language` must be a supported code; otherwise the built-in
    /// default is kept.
    pub fn new(default_language: &str) -> Self {
        Self {
            default_language: language::resolve(default_language),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: PlaceholderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    pub fn default_language(&self) -> &'static str {
        self.default_language
    }

    pub fn policy(&self) -> PlaceholderPolicy {
        self.policy
    }

    pub fn escape_html(&self) -> bool {
        self.escape_html
    }

    /// Bind `table` to the language resolved from `code`.
    pub fn text(&self, table: &'static TextTable, code: &str) -> Text {
        let language = language::resolve_or(code, self.default_language);
        Text::from_parts(table, language, self.policy, self.escape_html)
    }

    /// Shorthand for the messages group.
    pub fn messages(&self, code: &str) -> Text {
        self.text(&TEXT_MESSAGES, code)
    }
}
