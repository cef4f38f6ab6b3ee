use super::*;
use support_texts::{keys, PlaceholderPolicy};

#[test]
fn test_languages_plain() {
    let out = languages(false).unwrap();
    assert_eq!(out, "br\t🇧🇷 Português Brasileiro\nen\t🇬🇧 English");
}

#[test]
fn test_languages_json() {
    let out = languages(true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["code"], "br");
    assert_eq!(arr[1]["code"], "en");
    assert_eq!(arr[1]["name"], "🇬🇧 English");
}

#[test]
fn test_keys_lists_messages_group() {
    let out = keys("messages").unwrap();
    let listed: Vec<&str> = out.lines().collect();
    assert_eq!(listed, keys::ALL);
}

#[test]
fn test_unknown_group() {
    let err = keys("buttons").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown text group 'buttons' (known: messages)"
    );
}

#[test]
fn test_show_falls_back_to_default() {
    let l10n = Localizer::default();
    assert_eq!(
        show(&l10n, DEFAULT_GROUP, "fr", "user_blocked").unwrap(),
        "<b>User blocked!</b> Messages from the user are not accepted."
    );
    assert_eq!(
        show(&l10n, DEFAULT_GROUP, "br", "message_sent").unwrap(),
        "<b>Mensagem enviada!</b> Aguarde uma resposta."
    );
}

#[test]
fn test_show_missing_key() {
    let err = show(&Localizer::default(), DEFAULT_GROUP, "en", "nope").unwrap_err();
    assert!(err.to_string().contains("missing text key 'nope'"));
}

#[test]
fn test_parse_arg() {
    assert_eq!(parse_arg("id=42").unwrap(), ("id", "42"));
    assert_eq!(parse_arg("name=a=b").unwrap(), ("name", "a=b"));
    assert_eq!(parse_arg("state=").unwrap(), ("state", ""));
    assert!(parse_arg("novalue").is_err());
    assert!(parse_arg("=x").is_err());
}

#[test]
fn test_render_with_args() {
    let l10n = Localizer::default();
    let args = vec!["name=Ana".to_string()];
    assert_eq!(
        render(&l10n, DEFAULT_GROUP, "br", "user_stopped_bot", &args).unwrap(),
        "<b>O usuário Ana parou o bot!</b>"
    );
}

#[test]
fn test_render_strict_policy() {
    let l10n = Localizer::default().with_policy(PlaceholderPolicy::Error);
    assert!(render(&l10n, DEFAULT_GROUP, "en", "select_language", &[]).is_err());
    let args = vec!["full_name=Ana & Bo".to_string()];
    assert_eq!(
        render(&l10n, DEFAULT_GROUP, "en", "select_language", &args).unwrap(),
        "👋 <b>Hello</b>, Ana &amp; Bo!\n\nSelect language:"
    );
}

#[test]
fn test_check_reports_ok() {
    let (out, ok) = check("en");
    assert!(ok);
    assert_eq!(out, "messages: 17 keys, 2 languages, ok\n");
    assert!(validate_all("en").is_ok());
    assert!(validate_all("br").is_ok());
}

#[test]
fn test_validate_all_reports_through_support_error() {
    let result: Result<(), SupportError> = validate_all("xx");
    assert!(result.is_ok());
}
