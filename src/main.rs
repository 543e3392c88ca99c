// SPDX-License-Identifier: PMPL-1.0-or-later

//! vitebo-i18n: query the site's locale table from build scripts
//!
//! Every subcommand works on the embedded table unless `--config` points at a
//! JSON or YAML locale document.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitebo_i18n::audit;
use vitebo_i18n::config::{self, CatalogFormat, LocaleConfig};
use vitebo_i18n::i18n::{static_path_locales, PathTranslator};
use vitebo_i18n::LocaleTable;

#[derive(Parser)]
#[command(name = "vitebo-i18n")]
#[command(version)]
#[command(about = "Locale lookup and locale-aware paths for the Vitebo site")]
#[command(long_about = None)]
struct Cli {
    /// Locale table to use instead of the built-in one (.json, .yaml, .yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the locale of a URL or path
    Locale {
        #[arg(value_name = "URL_OR_PATH")]
        input: String,
    },

    /// Translate a key
    Translate {
        /// Locale to translate into
        #[arg(short, long)]
        lang: String,

        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Rewrite a path for another locale
    Path {
        /// Locale of the translator (used when --to is absent)
        #[arg(short, long)]
        lang: String,

        /// URL or path of the page doing the linking
        #[arg(long, default_value = "/")]
        current: String,

        /// Target locale, overriding --lang
        #[arg(short, long)]
        to: Option<String>,

        #[arg(value_name = "PATH")]
        path: String,
    },

    /// List the path segment each locale gets in generated routes
    StaticPaths,

    /// Check every locale against the default locale's keys
    Audit,

    /// Write the active locale table as JSON or YAML
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: CatalogFormat,

        /// Output file (stdout when absent)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.log_format, cli.verbose);

    let table = match &cli.config {
        Some(path) => config::load_table(path)
            .with_context(|| format!("loading locale table from {}", path.display()))?,
        None => LocaleTable::builtin(),
    };

    match cli.command {
        Commands::Locale { input } => {
            println!("{}", table.locale_of(&input));
        }

        Commands::Translate { lang, key } => {
            if !table.contains(&lang) {
                tracing::warn!(lang = %lang, "unknown locale, using default translations");
            }
            match table.translator(&lang).t(&key) {
                Some(text) => println!("{}", text),
                None => bail!("no translation for '{}' in {} or {}", key, lang, table.default_locale()),
            }
        }

        Commands::Path {
            lang,
            current,
            to,
            path,
        } => {
            if !path.starts_with('/') {
                tracing::warn!(path = %path, "path does not start with '/'");
            }
            let current_locale = table.locale_of(&current);
            let translator = PathTranslator::new(&table, &lang, current_locale);
            let rewritten = match &to {
                Some(target) => translator.translate_to(&path, target),
                None => translator.translate(&path),
            };
            println!("{}", rewritten);
        }

        Commands::StaticPaths => {
            for (locale, segment) in table.locales().iter().zip(static_path_locales(&table)) {
                println!("{:8} {}", locale, segment.unwrap_or("-"));
            }
        }

        Commands::Audit => {
            let report = audit::audit(&table);
            report.print();
            if report.has_errors() {
                return Err(anyhow!("locale table audit reported errors"));
            }
        }

        Commands::Export { format, output } => {
            let document = format.serialize(&LocaleConfig::from(&table))?;
            if let Some(output_path) = output {
                std::fs::write(&output_path, document)
                    .with_context(|| format!("writing {}", output_path.display()))?;
                tracing::info!(path = %output_path.display(), "locale table exported");
            } else {
                print!("{}", document);
            }
        }
    }

    Ok(())
}

fn setup_tracing(format: LogFormat, verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("vitebo_i18n=debug,info")
        } else {
            tracing_subscriber::EnvFilter::new("vitebo_i18n=info,warn")
        }
    });

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
