use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use centerpick::Result;
use centerpick::commands::{cmd_session, cmd_show_state};
use centerpick::config::Config;

const LOG_ENV: &str = "CENTERPICK_LOG";

#[derive(Parser)]
#[command(name = "centerpick")]
#[command(about = "Pick and page through graph visualization centers")]
#[command(version)]
struct Cli {
    /// Config file (default: .centerpick/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive picker session reading commands from stdin
    Session {
        /// State file (default: state_path from config)
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Print the persisted center state
    ShowState {
        /// State file (default: state_path from config)
        #[arg(long)]
        state: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Session { state } => {
            let path = state.unwrap_or_else(|| config.state_path.clone());
            cmd_session(&config, &path).await
        }
        Commands::ShowState { state } => {
            let path = state.unwrap_or_else(|| config.state_path.clone());
            cmd_show_state(&path)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
