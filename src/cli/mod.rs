//! Command-line interface for coursecat.
//!
//! Provides commands for serving the catalog over HTTP and for inspecting
//! the resolved configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::{self, AppState};
use crate::config::ResolvedConfig;
use crate::core::{Catalog, ContentResolver};

/// coursecat - educational content catalog service
#[derive(Parser, Debug)]
#[command(name = "coursecat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP catalog service
    Serve {
        /// Address to bind to (overrides config)
        #[arg(short, long, env = "COURSECAT_ADDRESS")]
        address: Option<String>,

        /// Path to a YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config {
        /// Path to a YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve { address, config } => serve(address, config.as_deref()).await,
            Commands::Config { config } => show_config(config.as_deref()),
        }
    }
}

async fn serve(address: Option<String>, config_path: Option<&Path>) -> Result<()> {
    let config = ResolvedConfig::load(config_path)?;
    let bind = address.unwrap_or_else(|| config.bind.clone());

    // The catalog starts empty and lives for the process lifetime
    let resolver = ContentResolver::new(Box::new(config.locator()));
    let catalog = Catalog::new(resolver);
    let state = AppState::new(catalog, config.activity_capacity);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    tracing::info!(address = %bind, "catalog service listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn show_config(config_path: Option<&Path>) -> Result<()> {
    let config = ResolvedConfig::load(config_path)?;
    println!("{:#?}", config);
    Ok(())
}
