//! jbot binary: `ask` one task, `run` a stdin loop, or print `info`.

use anyhow::Result;
use clap::Parser;
use joke_bot::{load_config, prepare_router, run_bot, AgentInfo, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { task } => {
            let config = load_config()?;
            let router = prepare_router(&config)?;
            println!("{}", router.process(&task.join(" ")).await);
            Ok(())
        }
        Commands::Run => {
            let config = load_config()?;
            run_bot(config).await
        }
        Commands::Info => {
            print!("{}", AgentInfo::default().render());
            Ok(())
        }
    }
}
