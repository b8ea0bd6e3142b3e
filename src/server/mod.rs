// src/server/mod.rs
//! Kuchnia HTTP server
//!
//! This module provides the web application:
//! - Serves the category list and category detail views (server-rendered)
//! - Accepts new recipe submissions via urlencoded form posts
//! - Holds all recipe state in an in-memory store owned by [`ServerState`]
//!
//! The SQLite schema is declared at startup when a database path is
//! configured; no request path touches it.

mod config;
mod handlers;
mod routes;
mod views;

pub use config::KuchniaConfig;
pub use routes::create_router;

use crate::db;
use crate::store::CategoryStore;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the SQLite database (schema declared at startup)
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".parse().unwrap(),
            db_path: PathBuf::from("./db.sqlite"),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub store: CategoryStore,
}

impl ServerState {
    /// State with the built-in seed categories
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            store: CategoryStore::seeded(),
        }
    }

    /// State backed by a caller-provided store
    pub fn with_store(config: ServerConfig, store: CategoryStore) -> Self {
        Self { config, store }
    }
}

/// Start the kuchnia server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting kuchnia server on {}", config.bind_addr);
    tracing::info!("Database: {:?}", config.db_path);

    // Declared schema only; the connection is dropped and the store stays
    // in memory
    db::init(&config.db_path)
        .with_context(|| format!("Failed to initialize database at {:?}", config.db_path))?;

    let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Kuchnia is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
