//! mister-boxart - box art lookup for MiSTer now-playing presence
//!
//! Reads the local thumbnail cache, resolves platform hints and game titles
//! to box art URLs, and builds presence payloads from now-playing snapshots.
//!
//! CHANGELOG:
//! - 10/16/2026 - Added presence and aliases commands
//! - 10/16/2026 - Initial scaffold with CLI skeleton

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use mister_boxart::commands;
use mister_boxart::config::Config;
use mister_boxart::engine::EngineHandle;
use mister_boxart::output::{format_error, OutputControls};

/// Box art lookup for MiSTer FPGA now-playing presence.
#[derive(Parser, Debug)]
#[command(name = "mister-boxart")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist (dotted names select nested fields)
    #[arg(long, global = true)]
    fields: Option<String>,

    /// Config file (default: MISTER_BOXART_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Box art cache file (default: MISTER_BOXART_CACHE or the config's catalog_path)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find box art for a game title
    Find {
        /// Game title as reported by the core
        title: String,

        /// Platform hint (system name, abbreviation, or folder name)
        #[arg(short, long)]
        platform: Option<String>,
    },

    /// Resolve a platform hint to a cache folder
    Resolve {
        /// Platform hint
        hint: String,
    },

    /// List platform folders in the cache
    Platforms,

    /// List platform aliases derived from the cache
    Aliases,

    /// Build presence payloads from now-playing JSON lines
    Presence {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // Build output controls from global flags
    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
        fields: cli.fields.clone(),
    };

    let result = run(&cli, &output_controls);

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if cli.json {
                println!("{}", format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli, output_controls: &OutputControls) -> anyhow::Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let handle = EngineHandle::new(config.catalog_path(cli.catalog.as_deref()), config.match_config());
    let engine = handle.get();

    match &cli.command {
        Command::Find { title, platform } => {
            commands::find::run(&engine, title, platform.as_deref(), output_controls)
        }
        Command::Resolve { hint } => commands::resolve::run(&engine, hint, output_controls),
        Command::Platforms => commands::platforms::list(&engine, output_controls),
        Command::Aliases => commands::platforms::aliases(&engine, output_controls),
        Command::Presence { input } => {
            commands::presence::run(&engine, &config.presence, input.as_deref(), output_controls)
        }
    }
}
