//! Pagewright CLI — the main entry point.
//!
//! Commands:
//! - `generate` — Full pipeline for one page
//! - `website`  — Multi-page site with shared header and footer
//! - `section`  — One section, local only
//! - `repair`   — Recover JSON from noisy or truncated text
//! - `tokens`   — Print a resolved design-token set
//! - `config`   — Configuration management

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "pagewright",
    about = "Pagewright — page-builder layouts from a business description",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Use this config file instead of ~/.pagewright/config.toml
    #[arg(long, global = true, env = "PAGEWRIGHT_CONFIG")]
    config: Option<PathBuf>,
}

/// Options shared by the generating commands.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Visual style: modern, minimal, bold or elegant
    #[arg(short, long)]
    pub style: Option<String>,

    /// Industry used when none is detected in the prompt
    #[arg(short, long)]
    pub industry: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single page layout
    Generate {
        /// Business description
        prompt: String,

        #[command(flatten)]
        style: StyleArgs,

        /// Page kind: landing, home, about, services, contact, pricing
        #[arg(short, long)]
        page_kind: Option<String>,

        /// Skip stock-photo enrichment
        #[arg(long)]
        no_media: bool,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print run statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Generate a multi-page website
    Website {
        /// Business description
        prompt: String,

        #[command(flatten)]
        style: StyleArgs,

        /// Comma-separated page list
        #[arg(long, value_delimiter = ',')]
        pages: Vec<String>,

        /// Skip stock-photo enrichment
        #[arg(long)]
        no_media: bool,

        /// Write the website here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print per-page run statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Generate one section with placeholder content (no network)
    Section {
        /// Section kind: hero, features, stats, testimonials, pricing, ...
        kind: String,

        /// Business description
        prompt: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Recover a JSON value from a file or stdin
    Repair {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print the design tokens for a style and industry
    Tokens {
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (secrets redacted)
    Show,
    /// Validate the configuration file
    Validate,
    /// Print the config file path
    Path,
    /// Write a starter config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool, json: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    // stdout carries documents; logs go to stderr.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Generate {
            prompt,
            style,
            page_kind,
            no_media,
            output,
            stats,
        } => {
            let request = commands::generate::PageRequest {
                style,
                page_kind,
                pages: Vec::new(),
                no_media,
                output,
                stats,
            };
            commands::generate::run(config, &prompt, request).await?
        }
        Commands::Website {
            prompt,
            style,
            pages,
            no_media,
            output,
            stats,
        } => {
            let request = commands::generate::PageRequest {
                style,
                page_kind: None,
                pages,
                no_media,
                output,
                stats,
            };
            commands::generate::website(config, &prompt, request).await?
        }
        Commands::Section {
            kind,
            prompt,
            style,
        } => commands::section::run(config, &kind, &prompt, &style)?,
        Commands::Repair { file } => commands::repair::run(file.as_deref())?,
        Commands::Tokens { style } => commands::tokens::run(config, &style)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show(config)?,
            ConfigAction::Validate => commands::config_cmd::validate(config)?,
            ConfigAction::Path => commands::config_cmd::path(config),
            ConfigAction::Init { force } => commands::config_cmd::init(config, force)?,
        },
    }

    Ok(())
}
