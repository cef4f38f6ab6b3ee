//! # support-texts
//!
//! Localized text store for the support bot: supported languages, static
//! per-language message tables, the `(language, key) -> template` lookup with
//! default-language fallback, and named-placeholder rendering.

pub mod error;
pub mod language;
pub mod localizer;
pub mod messages;
pub mod table;
pub mod template;
pub mod text;
pub mod validate;

pub use error::TextError;
pub use language::{Language, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use localizer::{group, groups, Localizer};
pub use messages::{keys, TEXT_MESSAGES};
pub use table::TextTable;
pub use template::PlaceholderPolicy;
pub use text::Text;
pub use validate::{validate, Issue, ValidationReport};
