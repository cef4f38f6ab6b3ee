mod commands;

use clap::{Parser, Subcommand};
use support_core::config;
use tracing::info;
use tracing_subscriber::{prelude::*, reload, EnvFilter};

#[derive(Parser)]
#[command(
    name = "support-bot",
    version,
    about = "Support bot localized text tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported languages in display order.
    Languages {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the message keys of a text group.
    Keys {
        #[arg(short, long, default_value = commands::DEFAULT_GROUP)]
        group: String,
    },
    /// Print the raw template for a key.
    Show {
        /// Requested language code (unsupported codes fall back).
        #[arg(short, long)]
        lang: String,
        key: String,
        #[arg(short, long, default_value = commands::DEFAULT_GROUP)]
        group: String,
    },
    /// Render a template with `name=value` arguments.
    Render {
        #[arg(short, long)]
        lang: String,
        key: String,
        /// Placeholder values, e.g. `full_name=Ana id=42`.
        args: Vec<String>,
        #[arg(short, long, default_value = commands::DEFAULT_GROUP)]
        group: String,
    },
    /// Validate every text group for key and placeholder parity.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise start at "info" and switch to the configured
    // level once the config is loaded.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load(&cli.config)?;
    if !from_env {
        filter_handle.reload(EnvFilter::new(&cfg.bot.log_level))?;
    }

    let l10n = cfg.texts.localizer();
    info!(
        "{}: default language '{}', placeholders '{}'",
        cfg.bot.name,
        l10n.default_language(),
        l10n.policy().display_name()
    );

    if cfg.texts.validate_on_start && !matches!(cli.command, Commands::Check) {
        commands::validate_all(l10n.default_language())?;
    }

    let output = match cli.command {
        Commands::Check => {
            let (report, ok) = commands::check(l10n.default_language());
            print!("{report}");
            if !ok {
                anyhow::bail!("text tables are inconsistent");
            }
            return Ok(());
        }
        Commands::Languages { json } => commands::languages(json)?,
        Commands::Keys { group } => commands::keys(&group)?,
        Commands::Show { lang, key, group } => commands::show(&l10n, &group, &lang, &key)?,
        Commands::Render {
            lang,
            key,
            args,
            group,
        } => commands::render(&l10n, &group, &lang, &key, &args)?,
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_accepts_group_after_args() {
        let cli = Cli::try_parse_from([
            "support-bot",
            "render",
            "--lang",
            "en",
            "user_stopped_bot",
            "name=Ana",
            "--group",
            "messages",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                lang,
                key,
                args,
                group,
            } => {
                assert_eq!(lang, "en");
                assert_eq!(key, "user_stopped_bot");
                assert_eq!(args, ["name=Ana"]);
                assert_eq!(group, "messages");
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_render_multiple_args_default_group() {
        let cli = Cli::try_parse_from([
            "support-bot",
            "render",
            "-l",
            "br",
            "user_information",
            "id=42",
            "full_name=Ana",
        ])
        .unwrap();
        let Commands::Render { args, group, .. } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args, ["id=42", "full_name=Ana"]);
        assert_eq!(group, commands::DEFAULT_GROUP);
        assert_eq!(cli.config, "config.toml");
    }
}
