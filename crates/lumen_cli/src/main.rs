//! Lumen - theme preference CLI
//!
//! Reads `lumen.toml` from the config directory, hydrates a theme store from
//! the persisted preference, and runs one command against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lumen_theme::{
    FileBackend, ModeMirror, ThemeConfig, ThemeMode, ThemeStore, TokenAccessor,
};
use std::path::PathBuf;

/// Inspect and change the persisted theme mode
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Inspect and change the persisted Lumen theme mode")]
#[command(version)]
struct Args {
    /// Directory containing lumen.toml (or the file itself)
    #[arg(short, long, default_value = ".")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current mode
    Show,
    /// Switch to a mode ("light" or "dark")
    Set { mode: String },
    /// Flip between light and dark
    Toggle,
    /// Forget the persisted preference
    Clear,
    /// Print the design tokens for the current mode
    Tokens {
        /// Print the full token set as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ThemeConfig::load_from_dir(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    let factory = config
        .token_factory()
        .context("Failed to load palette override")?;

    let mirror = ModeMirror::new();
    let store = ThemeStore::with_factory(config.preference_store(), &mirror, &factory)?
        .with_default_mode(config.default_mode());
    store.initialize().await;

    match args.command {
        Command::Show => show(&store),
        Command::Set { mode } => {
            let requested = match mode.parse::<ThemeMode>() {
                Ok(requested) => requested,
                Err(e) => {
                    tracing::warn!("{}, using {}", e, ThemeMode::Light);
                    ThemeMode::Light
                }
            };
            store.set_theme_mode(requested).await;
            show(&store);
        }
        Command::Toggle => {
            store.toggle_theme().await;
            show(&store);
        }
        Command::Clear => {
            store.clear_preference().await;
            println!("Cleared {} from {}", config.storage.key, config.preference_path().display());
        }
        Command::Tokens { json } => {
            let tokens = TokenAccessor::with_factory(store.mirror(), factory).current_tokens();
            if json {
                let out = serde_json::to_string_pretty(&*tokens)
                    .context("Failed to serialize tokens")?;
                println!("{out}");
            } else {
                let mut vars: Vec<_> = tokens.color_variables().into_iter().collect();
                vars.sort();
                for (name, value) in vars {
                    println!("--{name}: {value};");
                }
            }
        }
    }

    Ok(())
}

fn show(store: &ThemeStore<FileBackend>) {
    println!("mode: {}", store.mode());
    println!("is_dark: {}", store.is_dark());
}
