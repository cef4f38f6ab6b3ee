//! Operator subcommands. Each returns the text to print.

#[cfg(test)]
mod tests;

use anyhow::{bail, Context};
use serde::Serialize;
use support_core::error::SupportError;
use support_texts::{
    group as find_group, groups, validate::validate_with_default, Localizer, TextTable,
    SUPPORTED_LANGUAGES,
};

/// Group used when `--group` is not given.
pub const DEFAULT_GROUP: &str = "messages";

#[derive(Serialize)]
struct LanguageEntry<'a> {
    code: &'a str,
    name: &'a str,
}

fn lookup_group(name: &str) -> anyhow::Result<&'static TextTable> {
    match find_group(name) {
        Some(table) => Ok(table),
        None => {
            let known: Vec<&str> = groups().iter().map(|t| t.name()).collect();
            bail!("unknown text group '{name}' (known: {})", known.join(", "))
        }
    }
}

/// Supported languages, one `code<TAB>name` per line or as JSON.
pub fn languages(json: bool) -> anyhow::Result<String> {
    if json {
        let entries: Vec<LanguageEntry> = SUPPORTED_LANGUAGES
            .iter()
            .map(|l| LanguageEntry {
                code: l.code,
                name: l.name,
            })
            .collect();
        return serde_json::to_string_pretty(&entries).context("failed to serialize languages");
    }
    let lines: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|l| format!("{}\t{}", l.code, l.name))
        .collect();
    Ok(lines.join("\n"))
}

/// Keys of `group`, in the default language's order.
pub fn keys(group: &str) -> anyhow::Result<String> {
    let table = lookup_group(group)?;
    let keys: Vec<&str> = table.keys(support_texts::DEFAULT_LANGUAGE).collect();
    Ok(keys.join("\n"))
}

/// Raw template for `key` in the language resolved from `lang`.
pub fn show(l10n: &Localizer, group: &str, lang: &str, key: &str) -> anyhow::Result<String> {
    let text = l10n.text(lookup_group(group)?, lang);
    Ok(text.get(key)?.to_string())
}

/// Split a `name=value` argument.
pub fn parse_arg(arg: &str) -> anyhow::Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("invalid argument '{arg}', expected name=value"),
    }
}

/// Rendered template for `key` with `name=value` arguments.
pub fn render(
    l10n: &Localizer,
    group: &str,
    lang: &str,
    key: &str,
    args: &[String],
) -> anyhow::Result<String> {
    let text = l10n.text(lookup_group(group)?, lang);
    let args = args
        .iter()
        .map(|a| parse_arg(a))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(text.render(key, &args)?)
}

/// Validate every registered group, failing on the first inconsistent one.
pub fn validate_all(default_language: &str) -> Result<(), SupportError> {
    for table in groups() {
        validate_with_default(table, default_language).into_result()?;
    }
    Ok(())
}

/// Human-readable validation report for every group, and whether all passed.
pub fn check(default_language: &str) -> (String, bool) {
    let mut out = String::new();
    let mut ok = true;
    for table in groups() {
        let report = validate_with_default(table, default_language);
        let languages = table.languages().count();
        if report.is_ok() {
            out.push_str(&format!(
                "{}: {} keys, {} languages, ok\n",
                report.group(),
                report.key_count(),
                languages
            ));
            continue;
        }
        ok = false;
        out.push_str(&format!(
            "{}: {} keys, {} languages, {} issue(s)\n",
            report.group(),
            report.key_count(),
            languages,
            report.issues().len()
        ));
        for issue in report.issues() {
            out.push_str(&format!("  - {issue}\n"));
        }
    }
    (out, ok)
}
