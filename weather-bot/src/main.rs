use anyhow::Result;
use clap::Parser;
use weather_bot::{run_bot, Cli, Commands, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = Config::load(token)?;
            run_bot(config).await
        }
    }
}
