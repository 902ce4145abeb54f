//! Frontedit CLI: drive the edit form against a JSON site file.
//!
//! ```bash
//! frontedit render --store site.json --entity 42 --user 7 --role author
//! frontedit token --user 7 --session abc
//! frontedit handle --store site.json --request post.http --user 7 --role author --session abc
//! ```
//!
//! See `frontedit --help` for all available commands and options.

mod commands;

use clap::{Parser, Subcommand};
use commands::CallerArgs;
use frontedit_core::config::{EditorConfig, LoggingConfig, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "frontedit",
    about = "Render and handle the front-end edit form",
    version,
    after_help = "Configuration is read from frontedit.toml and FRONTEDIT_* variables."
)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the page body with the edit form expanded
    Render {
        /// JSON site file
        #[arg(long)]
        store: PathBuf,

        /// Entity whose page is rendered
        #[arg(long)]
        entity: u64,

        /// Page content; defaults to the bare shortcode
        #[arg(long)]
        content: Option<String>,

        #[command(flatten)]
        caller: CallerArgs,
    },

    /// Print an anti-forgery token for the configured action
    Token {
        #[command(flatten)]
        caller: CallerArgs,
    },

    /// Handle a raw HTTP request and print the raw HTTP response
    Handle {
        /// JSON site file; saved back when a submission is applied
        #[arg(long)]
        store: PathBuf,

        /// File holding the raw request; stdin when omitted
        #[arg(long)]
        request: Option<PathBuf>,

        /// Page content; defaults to the bare shortcode
        #[arg(long)]
        content: Option<String>,

        #[command(flatten)]
        caller: CallerArgs,
    },
}

fn init_logging(config: &LoggingConfig) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.parse_filters(&config.level);
    }
    let _ = builder.format_timestamp_millis().format_module_path(false).try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = EditorConfig::load_from(&cli.config)?;
    init_logging(&config.logging);

    match cli.command {
        Commands::Render { store, entity, content, caller } => {
            let page = commands::render::run(&config, &store, entity, content, &caller)?;
            print!("{}", page);
        }
        Commands::Token { caller } => {
            println!("{}", commands::token::run(&config, &caller)?);
        }
        Commands::Handle { store, request, content, caller } => {
            let raw = commands::read_request(request.as_deref())?;
            let response = commands::handle::run(&config, &store, &raw, content, &caller)?;
            print!("{}", String::from_utf8_lossy(&response));
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
