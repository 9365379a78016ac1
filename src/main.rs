use clap::Parser;
use salarytap::cmd::{Cli, run_pipeline};
use salarytap::errors::Result;
use salarytap::log::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    run_pipeline(&cli).await
}
