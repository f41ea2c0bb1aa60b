//! Command-line interface for skill-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **serve**: Start the HTTP recommendation service
//! - **recommend**: Rank teams for a request file without starting a server
//!
//! ## Usage
//!
//! ```text
//! # Start the service on the default port
//! skill-match serve
//!
//! # Bind to all interfaces with a tighter rate limit
//! skill-match serve --address 0.0.0.0 --rate-per-second 5
//!
//! # Rank teams offline
//! skill-match recommend request.json
//!
//! # Pipe a request in and get the HTTP response body back
//! cat request.json | skill-match recommend - --format json
//! ```

use clap::{Parser, Subcommand};

use crate::web::server::ServerConfig;

pub mod recommend;

#[derive(Parser)]
#[command(name = "skill-match")]
#[command(version)]
#[command(about = "Recommend teams by overlap with a user's skills")]
#[command(
    long_about = "skill-match ranks candidate teams for a user.\n\nA team matches when at least one of its required skills appears in the user's skill list (compared case-insensitively). Matches are scored by the number of shared skills and returned best-first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank teams for a request file
    Recommend(recommend::RecommendArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Seconds before an in-flight request is answered with 408
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Maximum number of requests processed at once
    #[arg(long, default_value = "100")]
    pub max_concurrency: usize,

    /// Sustained requests per second allowed from one IP
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub rate_per_second: u64,

    /// Burst of requests allowed from one IP
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(u32).range(1..))]
    pub rate_burst: u32,

    /// Maximum request body size in bytes
    #[arg(long, default_value = "2097152")]
    pub max_body_bytes: usize,
}

impl From<&ServeArgs> for ServerConfig {
    fn from(args: &ServeArgs) -> Self {
        Self {
            address: args.address.clone(),
            port: args.port,
            request_timeout: std::time::Duration::from_secs(args.timeout_secs),
            max_concurrency: args.max_concurrency,
            rate_per_second: args.rate_per_second,
            rate_burst: args.rate_burst,
            max_body_bytes: args.max_body_bytes,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
