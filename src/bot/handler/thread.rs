use serenity::all::{Context, GuildChannel};

use crate::{
    config::Config,
    model::thread::ForumThread,
    service::{discord::SerenityDiscordApi, thread::tag_new_thread},
};

/// Handles the thread_create event by tagging new tracking forum threads as pending.
pub async fn handle_thread_create(config: &Config, ctx: Context, channel: GuildChannel) {
    let Some(thread) = ForumThread::from_channel(&channel) else {
        return;
    };

    let api = SerenityDiscordApi::new(ctx.http.clone());
    let outcome = tag_new_thread(&api, config, &thread).await;

    tracing::debug!("Auto-tagging thread {} finished: {:?}", thread.id, outcome);
}
