//! CLI module for Realty Price Lab
//!
//! Provides subcommands:
//! - `serve`: HTTP API server
//! - `summary`: print per-column statistics as JSON
//! - `estimate`: price one property and print the result as JSON

pub mod estimate;
pub mod serve;
pub mod summary;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Realty Price Lab - listings analytics and price estimation
#[derive(Parser)]
#[command(name = "realty-price-lab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Print the summary table of the numeric columns
    Summary,

    /// Estimate the price of one property
    Estimate(estimate::EstimateArgs),
}

/// `.env`, then layered configuration; defaults when nothing is configured
fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    AppConfig::load().unwrap_or_default()
}
