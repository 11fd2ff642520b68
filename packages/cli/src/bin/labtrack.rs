use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::quotes::QuotesCommands;
use cli::requests::RequestsCommands;
use labtrack_cli::{open_repository, Config, StorageBackend};
use labtrack_config::RUST_LOG;

#[derive(Parser)]
#[command(name = "labtrack")]
#[command(about = "Labtrack CLI - laboratory test request tracking")]
#[command(version)]
struct Cli {
    /// Data directory (overrides LABTRACK_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Storage backend: json, sqlite or memory (overrides LABTRACK_STORAGE_BACKEND)
    #[arg(long, global = true)]
    backend: Option<StorageBackend>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the store with sample requests if it is empty
    Init,
    /// Manage test requests
    #[command(subcommand)]
    Requests(RequestsCommands),
    /// Show tester assignments for registered and in-test requests
    Assignments,
    /// Browse and draft sales quotes
    #[command(subcommand)]
    Quotes(QuotesCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match handle_command(cli).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn handle_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?.with_overrides(cli.data_dir, cli.backend);

    match cli.command {
        Commands::Quotes(quotes_cmd) => cli::quotes::handle_quotes_command(quotes_cmd),
        Commands::Init => {
            let repo = open_repository(&config).await?;
            if repo.initialize().await? {
                println!("{}", "Seeded the store with sample requests".green());
            } else {
                println!("{}", "Store already holds requests; nothing to do".yellow());
            }
            println!("{:<12} {}", "Backend:".cyan(), config.backend);
            println!("{:<12} {}", "Data dir:".cyan(), config.data_dir.display());
            Ok(())
        }
        Commands::Requests(requests_cmd) => {
            let repo = open_repository(&config).await?;
            repo.initialize().await?;
            cli::requests::handle_requests_command(&repo, requests_cmd).await
        }
        Commands::Assignments => {
            let repo = open_repository(&config).await?;
            repo.initialize().await?;
            cli::assignments::show_assignments(&repo).await
        }
    }
}
