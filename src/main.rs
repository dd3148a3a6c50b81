use anyhow::Result;
use clap::Parser;

use opportunity_engine::cli::{handle_command, Cli};
use opportunity_engine::{EngineConfig, OpportunityEngine};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("opportunity_engine=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();

    let config = EngineConfig::load()?;
    let engine = OpportunityEngine::new(&config)?;

    handle_command(cli, engine).await
}
