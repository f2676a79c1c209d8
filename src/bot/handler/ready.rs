//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Sets the bot's activity and
//! registers the slash commands in the configured guild. Registration failures are logged and
//! the bot keeps running with whatever commands Discord already has.

use serenity::all::{ActivityData, Context, Ready};

use crate::{bot::command::CommandRegistry, config::Config};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `config` - Application configuration holding the target guild
/// - `commands` - Registry providing the command definitions
pub async fn handle_ready(ctx: Context, ready: Ready, config: &Config, commands: &CommandRegistry) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("for bugs")));

    match config
        .guild_id
        .set_commands(&ctx.http, commands.definitions())
        .await
    {
        Ok(registered) => tracing::info!(
            "Registered {} slash commands in guild {}",
            registered.len(),
            config.guild_id
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
