use serenity::all::ForumTagId;

use crate::{
    config::Config,
    model::{tag::StatusTag, thread::ForumThread},
    service::{discord::DiscordApi, tag::compute_transition},
};

/// What the auto-tagger did with a newly created thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoTagOutcome {
    /// The thread is not in the tracking forum
    Ignored,
    /// The parent forum could not be read or is not a forum
    ForumUnavailable,
    /// The forum does not offer the pending tag
    PendingTagMissing,
    /// The thread already carries a status tag
    AlreadyTagged(StatusTag),
    Tagged(Vec<ForumTagId>),
    /// The tag update was rejected
    Failed,
}

/// Applies the pending tag to a new thread in the tracking forum that has no status yet.
///
/// Every failure is logged and reported through the outcome, never returned.
pub async fn tag_new_thread(
    api: &dyn DiscordApi,
    config: &Config,
    thread: &ForumThread,
) -> AutoTagOutcome {
    if !thread.is_in_forum(config.tracker_forum_id) {
        return AutoTagOutcome::Ignored;
    }

    let forum = match api.forum(config.tracker_forum_id).await {
        Ok(Some(forum)) => forum,
        Ok(None) => {
            tracing::error!(
                "Tracking channel {} is not a forum channel",
                config.tracker_forum_id
            );
            return AutoTagOutcome::ForumUnavailable;
        }
        Err(e) => {
            tracing::error!("Failed to fetch tracking forum: {}", e);
            return AutoTagOutcome::ForumUnavailable;
        }
    };

    let pending = config.tags.id(StatusTag::Pending);
    if forum.find_tag(pending).is_none() {
        tracing::warn!("Pending tag not found in forum: {}", forum.name);
        return AutoTagOutcome::PendingTagMissing;
    }

    if let Some(status) = config.tags.current_status(&thread.applied_tags) {
        tracing::debug!("Thread {} already has the {} tag", thread.name, status);
        return AutoTagOutcome::AlreadyTagged(status);
    }

    let tags = compute_transition(&thread.applied_tags, StatusTag::Pending, &config.tags);
    match api.set_applied_tags(thread.id, &tags).await {
        Ok(()) => {
            tracing::info!("Automatically applied Pending tag to new thread: {}", thread.name);
            AutoTagOutcome::Tagged(tags)
        }
        Err(e) => {
            tracing::error!("Failed to apply Pending tag to new thread {}: {}", thread.name, e);
            AutoTagOutcome::Failed
        }
    }
}
