//! Boat Race Trading Dashboard CLI
//!
//! - no subcommand / `tui`: interactive dashboard
//! - `snapshot`: load once and print
//! - `config`: print or write a default config file

use boatrace_dashboard::{
    config::{self, Config},
    logging::{self, LogTarget},
    snapshot, DashboardClient, DashboardController, SnapshotFormat,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "boatrace-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Balance history and recent bets for the boat race trading account")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dashboard API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    Tui,

    /// Load both datasets once and print them
    Snapshot {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SnapshotFormat::Table)]
        format: SnapshotFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, warnings) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Vec::new()),
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            logging::init(&config.logging, &LogTarget::interactive(&config.logging))?;
            report_config(&warnings, &config);

            let controller = build_controller(&config)?;
            boatrace_dashboard::tui::run(controller, &config.ui.title).await?;
        }

        Commands::Snapshot { format } => {
            logging::init(&config.logging, &LogTarget::one_shot(&config.logging))?;
            report_config(&warnings, &config);

            let mut controller = build_controller(&config)?;
            let state = controller.settle().await;
            print!("{}", snapshot::render(state, format)?);
        }

        Commands::Config { output } => {
            let content = config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn report_config(warnings: &[String], config: &Config) {
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(
        "Boat Race Trading Dashboard v{} using {}",
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );
}

fn build_controller(config: &Config) -> anyhow::Result<DashboardController> {
    let client = DashboardClient::new(config.api.client_config())?;
    Ok(DashboardController::new(Arc::new(client)))
}
