//! CLI module for the Credit Usage API

pub mod serve;

use clap::{Parser, Subcommand};

/// Credit Usage API - per-message credit usage for the current billing period
#[derive(Parser)]
#[command(name = "credit-usage-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the usage API server
    Serve(serve::ServeArgs),
}
