use serenity::all::{Context, Interaction};

use crate::{
    bot::command::{CommandContext, CommandRegistry},
    config::Config,
    data::pending_tester::PendingTesterStore,
    model::command::CommandInvocation,
    service::discord::{InteractionResponder, SerenityDiscordApi},
};

/// Handles the interaction_create event by dispatching slash commands.
///
/// Other interaction kinds are ignored, the bot registers no components or modals.
pub async fn handle_interaction_create(
    config: &Config,
    store: &dyn PendingTesterStore,
    commands: &CommandRegistry,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let invocation = CommandInvocation::from_interaction(&command);
    let api = SerenityDiscordApi::new(ctx.http.clone());
    let responder = InteractionResponder::new(ctx.http.clone(), command);

    let context = CommandContext {
        api: &api,
        responder: &responder,
        store,
        config,
    };

    let outcome = commands.dispatch(&context, &invocation).await;
    tracing::debug!("Command {} finished: {:?}", invocation.name, outcome);
}
