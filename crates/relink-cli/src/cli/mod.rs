//! CLI for relink IndieWeb endpoint discovery.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use relink_core::config;
use std::path::PathBuf;

use commands::{run_discover, run_normalize};

/// Top-level CLI for relink.
#[derive(Debug, Parser)]
#[command(name = "relink")]
#[command(about = "relink: discover IndieWeb endpoints advertised by a profile URL", long_about = None)]
pub struct Cli {
    /// Read HTTP settings from this TOML file instead of ~/.config/relink/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of an identity ("me") URL.
    Normalize {
        /// Identity URL or bare domain, e.g. example.com.
        me: String,
    },

    /// Discover authorization, token and micropub endpoints for an identity URL.
    Discover {
        /// Identity URL or bare domain, e.g. example.com.
        me: String,

        /// Print the endpoints as a JSON object.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Normalize { me } => run_normalize(&me)?,
            CliCommand::Discover { me, json } => {
                let cfg = match cli.config.as_deref() {
                    Some(path) => config::load_from(path)?,
                    None => config::load_or_default()?,
                };
                tracing::debug!("loaded config: {:?}", cfg);
                run_discover(&me, &cfg, json).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
