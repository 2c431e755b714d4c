mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daan_forms::PageKind;
use tracing_subscriber::EnvFilter;

use crate::commands::check::CheckRule;
use crate::config::{Config, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "daan", about = "Daan signup form validation and replay")]
struct Cli {
    /// Path to daan.toml
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one validation rule and print the result as JSON
    Check {
        #[arg(value_enum)]
        rule: CheckRule,
        /// Value to validate
        value: String,
        /// Second input for rules that need one (password, field label)
        #[arg(long)]
        aux: Option<String>,
        /// Use the required variant of phone, PAN or file
        #[arg(long)]
        required: bool,
    },
    /// List every form page with its steps and fields
    Pages,
    /// Replay a JSON event script against a page
    Replay {
        /// donor, ngo, campaigner, admin or sign-in
        page: PageKind,
        /// JSON array of events
        events: PathBuf,
        /// Print the rendered page instead of the state
        #[arg(long)]
        html: bool,
        /// Perform the submission side effects when the script submits
        #[arg(long)]
        submit: bool,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Check {
            rule,
            value,
            aux,
            required,
        } => commands::check::run(rule, &value, aux.as_deref(), required),
        Commands::Pages => commands::pages::run(),
        Commands::Replay {
            page,
            events,
            html,
            submit,
        } => commands::replay::run(&config, page, &events, html, submit).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });
    init_tracing(&config.log.filter);

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
