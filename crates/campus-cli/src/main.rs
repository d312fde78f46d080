use anyhow::{Context, Result};
use campus_core::AssistantConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "SmartCollege campus assistant", long_about = None)]
struct Cli {
    /// Path to a TOML config file (falls back to $CAMPUS_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Demo portal credentials. Any non-empty pair is accepted.
#[derive(Args, Debug, Clone)]
pub struct Credentials {
    #[arg(long, default_value = "john@college.edu")]
    pub email: String,
    #[arg(long, default_value = "demo")]
    pub password: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the student assistant
    Chat {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Classify text into topics (reads stdin lines when no text is given)
    Classify {
        texts: Vec<String>,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Print the answer for a single question
    Ask {
        text: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// List the admin student roster
    Roster {
        /// Case-insensitive filter on name, email or course
        #[arg(short, long, default_value = "")]
        filter: String,
        #[command(flatten)]
        credentials: Credentials,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AssistantConfig::resolve(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Chat { credentials } => commands::chat::run(&config, &credentials).await?,
        Commands::Classify { texts, json } => commands::classify::run(&texts, json)?,
        Commands::Ask { text, credentials } => commands::ask::run(&config, &text, &credentials)?,
        Commands::Roster {
            filter,
            credentials,
        } => commands::roster::run(&filter, &credentials)?,
    }

    Ok(())
}
