use std::sync::Arc;

use serenity::all::{Context, EventHandler, GuildChannel, Interaction, Member, Ready};
use serenity::async_trait;

use crate::{
    bot::command::CommandRegistry, config::Config, data::pending_tester::PendingTesterStore,
};

pub mod interaction;
pub mod member;
pub mod ready;
pub mod thread;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    pub store: Arc<dyn PendingTesterStore>,
    pub commands: Arc<CommandRegistry>,
}

impl Handler {
    pub fn new(
        config: Arc<Config>,
        store: Arc<dyn PendingTesterStore>,
        commands: Arc<CommandRegistry>,
    ) -> Self {
        Self {
            config,
            store,
            commands,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, &self.config, &self.commands).await;
    }

    /// Called when a slash command (or any other interaction) is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(
            &self.config,
            self.store.as_ref(),
            &self.commands,
            ctx,
            interaction,
        )
        .await;
    }

    /// Called when a thread is created or the bot is added to one
    async fn thread_create(&self, ctx: Context, thread: GuildChannel) {
        thread::handle_thread_create(&self.config, ctx, thread).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.config, self.store.as_ref(), ctx, new_member)
            .await;
    }
}
