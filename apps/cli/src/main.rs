mod commands;
mod config;
mod main_lib;
mod views;

use config::Config;
use main_lib::{init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    tracing::info!("Reports will be exported to {}", config.export_dir.display());
    run(&config).await
}
