//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from command handlers. Domain
//! errors live in their own modules and are wrapped via `#[from]`. None of these are ever shown
//! verbatim to Discord users; handlers translate them into short embeds and log the full chain.

pub mod config;
pub mod discord;
pub mod status;
pub mod store;
pub mod tester;

use thiserror::Error;

use crate::error::{config::ConfigError, discord::DiscordError, store::StoreError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the bot cannot run without its fixed identifiers.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Pending tester persistence failure.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Database connection or migration error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API or gateway error.
    #[error(transparent)]
    DiscordErr(#[from] DiscordError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Routes through `DiscordError` so the large serenity error stays boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(DiscordError::from(err))
    }
}
