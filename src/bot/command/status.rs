use serenity::{
    all::{CommandOptionType, CreateCommand, CreateCommandOption},
    async_trait,
};

use crate::{
    bot::command::{CommandContext, SlashCommand},
    error::{status::StatusError, AppError},
    model::{command::CommandInvocation, tag::StatusTag, thread::channel_jump_url},
    service::status::{DuplicateOf, StatusService, StatusTransition},
};

/// Runs a transition and logs the already reported failure, if any.
async fn run_transition(
    ctx: &CommandContext<'_>,
    invocation: &CommandInvocation,
    transition: StatusTransition,
    duplicate_of: Option<DuplicateOf>,
) {
    let service = StatusService::new(ctx.api, ctx.responder, ctx.config);

    match service.apply(invocation, transition, duplicate_of).await {
        Ok(outcome) => tracing::debug!(
            "{} transition on {}: {:?}",
            transition.status,
            invocation.channel_id,
            outcome
        ),
        Err(e @ (StatusError::InvalidContext | StatusError::ParentNotForum(_))) => {
            tracing::info!("{} command rejected: {}", invocation.name, e)
        }
        Err(e) => tracing::error!("{} command failed: {:?}", invocation.name, e),
    }
}

/// Single-status command such as `fix` or `investigate`.
pub struct StatusCommand {
    name: &'static str,
    description: &'static str,
    status: StatusTag,
}

impl StatusCommand {
    pub fn all() -> [StatusCommand; 4] {
        [
            StatusCommand {
                name: "fix",
                description: "Mark a bug as fixed and close the thread",
                status: StatusTag::Fixed,
            },
            StatusCommand {
                name: "in-progress",
                description: "Mark a bug as in progress (keeps thread open)",
                status: StatusTag::InProgress,
            },
            StatusCommand {
                name: "investigate",
                description: "Mark a bug as being investigated (keeps thread open)",
                status: StatusTag::Investigating,
            },
            StatusCommand {
                name: "resolved",
                description: "Mark a bug as resolved and close the thread",
                status: StatusTag::Resolved,
            },
        ]
    }
}

#[async_trait]
impl SlashCommand for StatusCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name).description(self.description)
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError> {
        run_transition(ctx, invocation, StatusTransition::to(self.status), None).await;

        Ok(())
    }
}

/// `bug` with `fix`, `in-progress` and `resolved` subcommands.
pub struct BugCommand;

impl BugCommand {
    const SUBCOMMANDS: [(&'static str, &'static str, StatusTag); 3] = [
        (
            "fix",
            "Mark a bug as fixed and close the thread",
            StatusTag::Fixed,
        ),
        (
            "in-progress",
            "Mark a bug as in progress (keeps thread open)",
            StatusTag::InProgress,
        ),
        (
            "resolved",
            "Mark a bug as resolved and close the thread",
            StatusTag::Resolved,
        ),
    ];
}

#[async_trait]
impl SlashCommand for BugCommand {
    fn name(&self) -> &'static str {
        "bug"
    }

    fn register(&self) -> CreateCommand {
        Self::SUBCOMMANDS.iter().fold(
            CreateCommand::new("bug").description("Bug management commands"),
            |command, (name, description, _)| {
                command.add_option(CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    *name,
                    *description,
                ))
            },
        )
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError> {
        let status = Self::SUBCOMMANDS
            .iter()
            .find(|(name, _, _)| invocation.subcommand.as_deref() == Some(*name))
            .map(|(_, _, status)| *status);

        match status {
            Some(status) => {
                run_transition(ctx, invocation, StatusTransition::to(status), None).await
            }
            None => tracing::debug!(
                "Ignoring bug command with subcommand {:?}",
                invocation.subcommand
            ),
        }

        Ok(())
    }
}

/// `duplicate <thread>`, closing the current thread in favour of another report.
pub struct DuplicateCommand;

#[async_trait]
impl SlashCommand for DuplicateCommand {
    fn name(&self) -> &'static str {
        "duplicate"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("duplicate")
            .description("Mark this thread as a duplicate")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "thread",
                    "The original thread this is a duplicate of",
                )
                .required(true),
            )
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError> {
        let Some((channel_id, name)) = invocation.channel_option("thread") else {
            tracing::warn!("Duplicate command received without a thread option");
            return Ok(());
        };

        let guild_id = invocation.guild_id.unwrap_or(ctx.config.guild_id);
        let original = DuplicateOf {
            channel_id,
            name: name.unwrap_or("original thread").to_string(),
            url: channel_jump_url(guild_id, channel_id),
        };

        run_transition(
            ctx,
            invocation,
            StatusTransition::to(StatusTag::Duplicate),
            Some(original),
        )
        .await;

        Ok(())
    }
}
