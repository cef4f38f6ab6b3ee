//! Static per-language text tables.

/// `(message key, template)` pairs for one language.
pub type Entries = &'static [(&'static str, &'static str)];

/// One group of localized texts: language code → (message key → template).
///
/// Tables are plain `static` data; nothing mutates them after compile time,
/// so any number of threads may read them without coordination.
#[derive(Debug)]
pub struct TextTable {
    name: &'static str,
    languages: &'static [(&'static str, Entries)],
}

impl TextTable {
    pub const fn new(name: &'static str, languages: &'static [(&'static str, Entries)]) -> Self {
        Self { name, languages }
    }

    /// Group name, used in errors and by the CLI.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Language codes present in this table, in declaration order.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> {
        self.languages.iter().map(|(code, _)| *code)
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.entries(code).is_some()
    }

    /// All `(key, template)` pairs for `code`.
    pub fn entries(&self, code: &str) -> Option<Entries> {
        self.languages
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, entries)| *entries)
    }

    /// Message keys defined for `code`, in declaration order.
    /// Empty when the language has no table.
    pub fn keys(&self, code: &str) -> impl Iterator<Item = &'static str> {
        self.entries(code)
            .unwrap_or(&[])
            .iter()
            .map(|(key, _)| *key)
    }

    /// Raw template for `key` in language `code`. No fallback of any kind.
    pub fn lookup(&self, code: &str, key: &str) -> Option<&'static str> {
        self.entries(code)?
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
    }
}
