use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{command::CommandRegistry, handler::Handler},
    config::Config,
    data::pending_tester::PendingTesterStore,
    error::AppError,
};

/// Builds the Discord client with the bot's event handler and command registry.
///
/// # Arguments
/// - `config` - Application configuration
/// - `store` - Pending tester set shared by the tester command and the join handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - The client could not be built (e.g. malformed token)
pub async fn init_bot(
    config: Arc<Config>,
    store: Arc<dyn PendingTesterStore>,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_MESSAGES;

    let handler = Handler::new(
        config.clone(),
        store,
        Arc::new(CommandRegistry::with_default_commands()),
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot, running until the gateway connection ends.
///
/// # Returns
/// - `Ok(())` - The client shut down cleanly
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
