use super::*;
use crate::language::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
use crate::template::placeholders;
use crate::text::Text;
use crate::validate::validate;

#[test]
fn test_every_supported_language_has_every_default_key() {
    for lang in SUPPORTED_LANGUAGES {
        let text = Text::messages(lang.code);
        assert_eq!(text.language(), lang.code);
        for key in TEXT_MESSAGES.keys(DEFAULT_LANGUAGE) {
            let val = text.get(key).unwrap();
            assert!(!val.is_empty(), "key '{key}' is empty for '{}'", lang.code);
        }
    }
}

#[test]
fn test_unsupported_language_matches_english() {
    for code in ["fr", "", "xx", "pt"] {
        let fallback = Text::messages(code);
        let english = Text::messages("en");
        assert_eq!(fallback.language(), "en");
        for key in keys::ALL {
            assert_eq!(fallback.get(key), english.get(key));
        }
    }
}

#[test]
fn test_lookups_are_repeatable() {
    for lang in SUPPORTED_LANGUAGES {
        let text = Text::messages(lang.code);
        for key in keys::ALL {
            assert_eq!(text.get(key), text.get(key));
            assert_eq!(text.get(key), Text::messages(lang.code).get(key));
        }
    }
}

#[test]
fn test_fallback_user_blocked() {
    assert_eq!(
        Text::messages("fr").get("user_blocked").unwrap(),
        "<b>User blocked!</b> Messages from the user are not accepted."
    );
}

#[test]
fn test_portuguese_message_sent() {
    assert_eq!(
        Text::messages("br").get("message_sent").unwrap(),
        "<b>Mensagem enviada!</b> Aguarde uma resposta."
    );
}

#[test]
fn test_user_information_keeps_id_placeholder() {
    let info = Text::messages("en").get("user_information").unwrap();
    assert!(info.contains("<code>{id}</code>"));
}

#[test]
fn test_key_sets_match_across_languages() {
    let en: Vec<&str> = TEXT_MESSAGES.keys("en").collect();
    let br: Vec<&str> = TEXT_MESSAGES.keys("br").collect();
    assert_eq!(en, br);
    assert_eq!(en, keys::ALL);
}

#[test]
fn test_messages_table_validates() {
    let report = validate(&TEXT_MESSAGES);
    assert!(report.is_ok(), "{:?}", report.issues());
    assert_eq!(report.key_count(), keys::ALL.len());
}

#[test]
fn test_table_languages_are_supported() {
    for code in TEXT_MESSAGES.languages() {
        assert!(crate::language::is_supported(code), "'{code}' not supported");
    }
}

#[test]
fn test_placeholders_per_key() {
    let expected: &[(&str, &[&str])] = &[
        (keys::SELECT_LANGUAGE, &["full_name"]),
        (keys::USER_STARTED_BOT, &["name"]),
        (keys::USER_RESTARTED_BOT, &["name"]),
        (keys::USER_STOPPED_BOT, &["name"]),
        (
            keys::USER_INFORMATION,
            &["id", "full_name", "state", "username", "is_banned", "created_at"],
        ),
        (keys::USER_BLOCKED, &[]),
        (keys::SOURCE, &[]),
    ];
    for lang in ["en", "br"] {
        for (key, names) in expected {
            let template = TEXT_MESSAGES.lookup(lang, key).unwrap();
            assert_eq!(placeholders(template), *names, "{lang}/{key}");
        }
    }
}

#[test]
fn test_admin_help_lists_commands() {
    for lang in ["en", "br"] {
        let help = Text::messages(lang).get(keys::USER_STARTED_BOT).unwrap();
        for cmd in ["/ban", "/silent", "/information"] {
            assert!(help.contains(cmd), "{lang} help should mention {cmd}");
        }
    }
}

#[test]
fn test_multiline_templates_join_exactly() {
    assert_eq!(
        Text::messages("en").get(keys::MESSAGE_EDITED).unwrap(),
        "<b>The message was edited only in your chat.</b> \
         To send an edited message, send it as a new message."
    );
    assert!(Text::messages("br")
        .get(keys::SOURCE)
        .unwrap()
        .starts_with("Código-fonte disponível em <a href=\"https://github.com/nessshon/support-bot\">"));
}
