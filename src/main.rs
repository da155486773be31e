use clap::Parser;
use credit_usage_api::cli::{serve, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => serve::run(args).await,
    }
}
