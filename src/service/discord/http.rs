use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serenity::{
    all::{
        Channel, ChannelId, CommandInteraction, CreateInteractionResponse,
        CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse, EditThread,
        ForumTagId, GuildId, Http, RoleId, UserId,
    },
    async_trait,
};

use crate::{
    error::discord::DiscordError,
    model::{
        member::GuildMember,
        message::{OutgoingMessage, Reply},
        thread::{Forum, ForumThread},
    },
    service::discord::{DiscordApi, Responder},
};

const NOT_FOUND: u16 = 404;

/// Whether Discord answered the request with 404, i.e. the channel or member is unknown.
fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(e) => e.status_code().map(|status| status.as_u16()) == Some(NOT_FOUND),
        _ => false,
    }
}

/// `DiscordApi` backed by the bot's serenity HTTP client.
pub struct SerenityDiscordApi {
    http: Arc<Http>,
}

impl SerenityDiscordApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    async fn guild_channel(
        &self,
        channel_id: ChannelId,
    ) -> Result<Option<serenity::all::GuildChannel>, DiscordError> {
        match self.http.get_channel(channel_id).await {
            Ok(Channel::Guild(channel)) => Ok(Some(channel)),
            Ok(_) => Ok(None),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn thread(&self, channel_id: ChannelId) -> Result<Option<ForumThread>, DiscordError> {
        Ok(self
            .guild_channel(channel_id)
            .await?
            .as_ref()
            .and_then(ForumThread::from_channel))
    }

    async fn forum(&self, channel_id: ChannelId) -> Result<Option<Forum>, DiscordError> {
        Ok(self
            .guild_channel(channel_id)
            .await?
            .as_ref()
            .and_then(Forum::from_channel))
    }

    async fn set_applied_tags(
        &self,
        thread_id: ChannelId,
        tags: &[ForumTagId],
    ) -> Result<(), DiscordError> {
        thread_id
            .edit_thread(
                &self.http,
                EditThread::new().applied_tags(tags.iter().copied()),
            )
            .await?;

        Ok(())
    }

    async fn archive_thread(&self, thread_id: ChannelId) -> Result<(), DiscordError> {
        thread_id
            .edit_thread(&self.http, EditThread::new().archived(true))
            .await?;

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<(), DiscordError> {
        let mut builder = CreateMessage::new().embed(message.embed.to_create_embed());
        if let Some(content) = message.content {
            builder = builder.content(content);
        }

        channel_id.send_message(&self.http, builder).await?;

        Ok(())
    }

    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<GuildMember>, DiscordError> {
        match self.http.get_member(guild_id, user_id).await {
            Ok(member) => Ok(Some(GuildMember::from(&member))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), DiscordError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some("Tester role assignment"))
            .await?;

        Ok(())
    }
}

/// `Responder` for a single slash command interaction.
pub struct InteractionResponder {
    http: Arc<Http>,
    interaction: CommandInteraction,
    deferred: AtomicBool,
}

impl InteractionResponder {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self {
            http,
            interaction,
            deferred: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl Responder for InteractionResponder {
    async fn defer(&self, ephemeral: bool) -> Result<(), DiscordError> {
        if ephemeral {
            self.interaction.defer_ephemeral(&self.http).await?;
        } else {
            self.interaction.defer(&self.http).await?;
        }
        self.deferred.store(true, Ordering::SeqCst);

        Ok(())
    }

    async fn respond(&self, reply: Reply) -> Result<(), DiscordError> {
        if self.deferred.load(Ordering::SeqCst) {
            let mut builder = EditInteractionResponse::new();
            if let Some(content) = reply.content {
                builder = builder.content(content);
            }
            if let Some(embed) = reply.embed {
                builder = builder.embed(embed.to_create_embed());
            }

            self.interaction.edit_response(&self.http, builder).await?;
        } else {
            let mut message = CreateInteractionResponseMessage::new().ephemeral(reply.ephemeral);
            if let Some(content) = reply.content {
                message = message.content(content);
            }
            if let Some(embed) = reply.embed {
                message = message.embed(embed.to_create_embed());
            }

            self.interaction
                .create_response(&self.http, CreateInteractionResponse::Message(message))
                .await?;
        }

        Ok(())
    }
}
