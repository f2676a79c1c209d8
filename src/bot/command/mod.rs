//! Slash command routing.
//!
//! `CommandRegistry` owns every `SlashCommand`, supplies their definitions for registration,
//! and dispatches invocations behind the permission gate. It is the failure boundary for
//! command handlers: an error returned by a handler is logged and answered with a generic
//! error embed, never propagated.

pub mod status;
pub mod tester;

#[cfg(test)]
mod test;

use std::collections::HashMap;

use serenity::{all::CreateCommand, async_trait};

use crate::{
    config::Config,
    data::pending_tester::PendingTesterStore,
    error::AppError,
    model::{command::CommandInvocation, message::Reply},
    service::{
        discord::{DiscordApi, Responder},
        embed,
        permission::authorize,
    },
};

use self::{
    status::{BugCommand, DuplicateCommand, StatusCommand},
    tester::TesterCommand,
};

/// Collaborators available to a command while it handles one invocation.
pub struct CommandContext<'a> {
    pub api: &'a dyn DiscordApi,
    pub responder: &'a dyn Responder,
    pub store: &'a dyn PendingTesterStore,
    pub config: &'a Config,
}

#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Name the command is registered and looked up under.
    fn name(&self) -> &'static str;

    /// Definition sent to Discord when the commands are registered.
    fn register(&self) -> CreateCommand;

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError>;
}

/// How the router disposed of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    UnknownCommand,
    PermissionDenied,
    Executed,
    /// The handler returned an error and the generic error reply was sent
    Failed,
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn SlashCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every command the bot exposes.
    pub fn with_default_commands() -> Self {
        let mut registry = Self::new();

        registry.register(TesterCommand);
        registry.register(BugCommand);
        for command in StatusCommand::all() {
            registry.register(command);
        }
        registry.register(DuplicateCommand);

        registry
    }

    /// Adds a command, replacing any command registered under the same name.
    pub fn register(&mut self, command: impl SlashCommand + 'static) {
        let name = command.name().to_lowercase();
        tracing::info!("Registered command: {}", name);
        self.commands.insert(name, Box::new(command));
    }

    /// Command definitions sorted by name.
    pub fn definitions(&self) -> Vec<CreateCommand> {
        let mut names: Vec<&String> = self.commands.keys().collect();
        names.sort();

        names
            .into_iter()
            .map(|name| self.commands[name].register())
            .collect()
    }

    /// Routes an invocation to its command.
    ///
    /// Unknown commands are dropped without a reply. Members lacking the required role get
    /// the permission denied embed. Handler errors are logged and answered with the generic
    /// error embed.
    pub async fn dispatch(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &CommandInvocation,
    ) -> DispatchOutcome {
        let Some(command) = self.commands.get(&invocation.name.to_lowercase()) else {
            tracing::warn!("Unknown command: {}", invocation.name);
            return DispatchOutcome::UnknownCommand;
        };

        if !authorize(invocation.member.as_ref(), ctx.config.required_role_id) {
            tracing::info!(
                "User {} attempted to use command {} without required role",
                invocation.invoker_name(),
                invocation.name
            );
            if let Err(e) = ctx
                .responder
                .respond(Reply::embed(embed::permission_denied()).ephemeral())
                .await
            {
                tracing::error!("Failed to send permission denied response: {}", e);
            }
            return DispatchOutcome::PermissionDenied;
        }

        tracing::info!(
            "Executing command: {} by user: {}",
            invocation.name,
            invocation.invoker_name()
        );

        match command.execute(ctx, invocation).await {
            Ok(()) => DispatchOutcome::Executed,
            Err(e) => {
                tracing::error!("Error executing command {}: {:?}", invocation.name, e);
                if let Err(e) = ctx
                    .responder
                    .respond(Reply::embed(embed::generic_error()).ephemeral())
                    .await
                {
                    tracing::error!("Failed to send error response: {}", e);
                }
                DispatchOutcome::Failed
            }
        }
    }
}
