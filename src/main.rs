mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use std::{process::ExitCode, sync::Arc};

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Stacker stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Arc::new(Config::from_env()?);

    let store = startup::connect_pending_tester_store(&config).await?;

    let client = bot::start::init_bot(config, store).await?;
    bot::start::start_bot(client).await
}
