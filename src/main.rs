use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use docs_admin::logging::{self, LogTarget};
use docs_admin::model::{AdminConfig, BASE_URL_ENV};
use docs_admin::remote::RemoteClient;
use docs_admin::tui::{self, TuiRunOptions};

mod cli_exec;

#[derive(Parser)]
#[command(name = "docs-admin")]
#[command(about = "Edit, upload to and publish a documentation site", long_about = None)]
struct Cli {
    /// Config file (defaults to ./docs-admin.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Server base URL; overrides the config file and DOCS_ADMIN_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive editor (default)
    Tui,

    /// List editable pages
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a page's source
    Cat { path: String },

    /// Replace a page's source with a local file
    Put {
        path: String,
        /// Local file holding the new content
        #[arg(long)]
        from: PathBuf,
    },

    /// Upload an asset and print its URL and a markdown reference
    Upload { file: PathBuf },

    /// Build and publish the site
    Build {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Check that the admin server is reachable
    Health,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = AdminConfig::load(cli.config.as_deref())?
        .with_overrides(std::env::var(BASE_URL_ENV).ok(), cli.base_url);
    config.validate().context("invalid config")?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let target = match config.log_file.as_deref() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Off,
            };
            logging::init(target, cli.verbose)?;
            tui::run(TuiRunOptions { config })
        }
        command => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            let client = RemoteClient::new(config).context("create api client")?;
            cli_exec::handle_command(&client, command)
        }
    }
}
