use support_texts::DEFAULT_LANGUAGE;

pub(super) fn default_name() -> String {
    "support-bot".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
pub(super) fn default_true() -> bool {
    true
}
