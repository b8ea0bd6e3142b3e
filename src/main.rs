// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use kuchnia::server::{run_server, KuchniaConfig, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kuchnia")]
#[command(author, version, about = "Recipe collection web server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind to (default: 0.0.0.0:8000)
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the SQLite database (default: ./db.sqlite)
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        bind: None,
        config: None,
        db_path: None,
    });

    match command {
        Commands::Serve {
            bind,
            config,
            db_path,
        } => {
            let mut server_config = match config {
                Some(path) => KuchniaConfig::load(&path)?.to_server_config()?,
                None => ServerConfig::default(),
            };
            if let Some(bind) = bind {
                server_config.bind_addr = bind;
            }
            if let Some(db_path) = db_path {
                server_config.db_path = db_path;
            }
            run_server(server_config).await
        }
    }
}
