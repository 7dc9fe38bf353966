//! CLI entry point for postlist

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postlist::commands::render::OutputFormat;
use postlist::ListConfig;

#[derive(Parser)]
#[command(name = "postlist")]
#[command(author = "Yukang Chen")]
#[command(version)]
#[command(about = "Search, filter and paginate a static blog's post index", long_about = None)]
struct Cli {
    /// Configuration file (defaults to _config.yml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the post list for a query string
    #[command(alias = "r")]
    Render {
        /// Post index: a JSON file, or an HTML page embedding one
        #[arg(long)]
        data: PathBuf,

        /// Query string to apply, e.g. "?q=rust&p=2"
        #[arg(short, long, default_value = "")]
        location: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List categories and tags with post counts
    Categories {
        /// Post index: a JSON file, or an HTML page embedding one
        #[arg(long)]
        data: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postlist=debug,info"
    } else {
        "postlist=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config)?;

    match cli.command {
        Commands::Render {
            data,
            location,
            format,
        } => {
            tracing::info!("Rendering {:?} with location {:?}", data, location);
            postlist::commands::render::run(config, &data, &location, format)?;
        }

        Commands::Categories { data } => {
            postlist::commands::categories::run(&config, &data)?;
        }

        Commands::Version => {
            println!("postlist version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// An explicit config file must exist; the default one is optional
fn load_config(path: Option<PathBuf>) -> Result<ListConfig> {
    match path {
        Some(path) => Ok(ListConfig::load(&path)?),
        None => {
            let default = PathBuf::from("_config.yml");
            if default.exists() {
                tracing::debug!("Loading config from {:?}", default);
                Ok(ListConfig::load(&default)?)
            } else {
                Ok(ListConfig::default())
            }
        }
    }
}
