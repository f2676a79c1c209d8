use serenity::all::{Context, Member};

use crate::{
    config::Config,
    data::pending_tester::PendingTesterStore,
    service::{discord::SerenityDiscordApi, tester::resolve_join},
};

/// Handles the guild_member_addition event by granting pending tester roles
pub async fn handle_guild_member_addition(
    config: &Config,
    store: &dyn PendingTesterStore,
    ctx: Context,
    new_member: Member,
) {
    let api = SerenityDiscordApi::new(ctx.http.clone());

    let outcome = resolve_join(&api, store, config, new_member.guild_id, new_member.user.id).await;

    tracing::debug!(
        "Member {} joined guild {}: {:?}",
        new_member.user.name,
        new_member.guild_id,
        outcome
    );
}
