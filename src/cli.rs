//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;

/// libref - Resolve library references into checked-out git repositories
#[derive(Parser, Debug)]
#[command(name = "libref")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: log::LevelFilter,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone missing libraries and check out every library at its declared revision
    Deploy(commands::deploy::DeployArgs),

    /// Clone a project repository and deploy its libraries
    Import(commands::import::ImportArgs),

    /// List library references and whether they are resolved
    Status(commands::status::StatusArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);

        match self.color {
            ColorChoice::Always => console::set_colors_enabled(true),
            ColorChoice::Never => console::set_colors_enabled(false),
            ColorChoice::Auto => {}
        }

        match self.command {
            Commands::Deploy(args) => commands::deploy::execute(args),
            Commands::Import(args) => commands::import::execute(args),
            Commands::Status(args) => commands::status::execute(args),
        }
    }
}

/// Log to stderr at `level`, unless `RUST_LOG` says otherwise.
fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp(None);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // SetLoggerError only means a logger is already installed; keep that one
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized, keeping the existing one");
    }
}
