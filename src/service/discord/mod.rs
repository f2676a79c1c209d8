//! Seam between the workflow services and the Discord API.
//!
//! Services talk to Discord through `DiscordApi` for REST calls and `Responder` for replies to
//! the interaction that triggered them. The serenity-backed implementations live in `http`.

pub mod http;

#[cfg(test)]
pub mod mock;

use serenity::{
    all::{ChannelId, ForumTagId, GuildId, RoleId, UserId},
    async_trait,
};

use crate::{
    error::discord::DiscordError,
    model::{
        member::GuildMember,
        message::{OutgoingMessage, Reply},
        thread::{Forum, ForumThread},
    },
};

pub use http::{InteractionResponder, SerenityDiscordApi};

/// Discord REST operations used by the workflow.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Fetches a channel as a thread.
    ///
    /// # Returns
    /// - `Ok(Some(ForumThread))` - The channel exists and is a thread
    /// - `Ok(None)` - The channel does not exist or is not a thread
    /// - `Err(DiscordError)` - The request failed
    async fn thread(&self, channel_id: ChannelId) -> Result<Option<ForumThread>, DiscordError>;

    /// Fetches a channel as a forum, `Ok(None)` when it is missing or of another type.
    async fn forum(&self, channel_id: ChannelId) -> Result<Option<Forum>, DiscordError>;

    /// Replaces the full set of tags applied to a thread.
    async fn set_applied_tags(
        &self,
        thread_id: ChannelId,
        tags: &[ForumTagId],
    ) -> Result<(), DiscordError>;

    async fn archive_thread(&self, thread_id: ChannelId) -> Result<(), DiscordError>;

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<(), DiscordError>;

    /// Looks up a guild member.
    ///
    /// # Returns
    /// - `Ok(Some(GuildMember))` - The user is in the guild
    /// - `Ok(None)` - Discord reports the member as unknown
    /// - `Err(DiscordError)` - Any other failure
    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<GuildMember>, DiscordError>;

    async fn add_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), DiscordError>;
}

/// Replies to the interaction that is being handled.
///
/// Once `defer` succeeds every later `respond` edits the deferred response, which keeps the
/// visibility chosen at deferral.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn defer(&self, ephemeral: bool) -> Result<(), DiscordError>;

    async fn respond(&self, reply: Reply) -> Result<(), DiscordError>;
}
