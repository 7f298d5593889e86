use clap::Parser;
use realty_price_lab::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Summary => cli::summary::run().await,
        Command::Estimate(args) => cli::estimate::run(args).await,
    }
}
