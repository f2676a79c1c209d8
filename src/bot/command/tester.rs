use serenity::{
    all::{CommandOptionType, CreateCommand, CreateCommandOption},
    async_trait,
};

use crate::{
    bot::command::{CommandContext, SlashCommand},
    error::AppError,
    model::{command::CommandInvocation, message::Reply},
    service::{embed, tester::assign_or_queue},
};

/// `tester <user>`, granting both tester roles now or once the user joins.
pub struct TesterCommand;

#[async_trait]
impl SlashCommand for TesterCommand {
    fn name(&self) -> &'static str {
        "tester"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("tester")
            .description("Assign tester roles to a user")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "The user to assign tester roles to",
                )
                .required(true),
            )
    }

    /// Replies publicly, the result is visible to the channel.
    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError> {
        if let Err(e) = ctx.responder.defer(false).await {
            tracing::warn!("Failed to defer tester reply: {}", e);
        }

        let Some(guild_id) = invocation.guild_id else {
            ctx.responder.respond(Reply::embed(embed::guild_only())).await?;
            return Ok(());
        };

        let Some(target) = invocation.user_option("user") else {
            tracing::warn!("Tester command received without a user option");
            return Ok(());
        };

        let outcome = assign_or_queue(ctx.api, ctx.store, ctx.config, guild_id, target).await;

        ctx.responder.respond(Reply::embed(outcome.embed())).await?;

        Ok(())
    }
}
