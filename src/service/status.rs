//! Status transition pipeline shared by every status command.
//!
//! A transition runs as a fixed sequence: validate the channel, defer, resolve the tag,
//! update the thread's tags, acknowledge, notify the thread, then optionally archive it. The
//! pipeline replies to the invoker itself, so a returned `StatusError` only needs logging.

use serenity::all::{ChannelId, ForumTagId};

use crate::{
    config::Config,
    error::status::StatusError,
    model::{
        command::CommandInvocation,
        message::{OutgoingMessage, Reply},
        tag::StatusTag,
        thread::{Forum, ForumThread},
    },
    service::{
        discord::{DiscordApi, Responder},
        embed,
        tag::compute_transition,
    },
};

/// Target of a status command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub status: StatusTag,
    /// Archive the thread once the notification is posted
    pub close_after: bool,
}

impl StatusTransition {
    /// Transition to `status`, closing the thread when the status is a final one.
    pub fn to(status: StatusTag) -> Self {
        Self {
            status,
            close_after: status.closes_thread(),
        }
    }
}

/// The original report a thread is being closed as a duplicate of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateOf {
    pub channel_id: ChannelId,
    pub name: String,
    pub url: String,
}

/// What a transition that got past the tag update went on to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub applied_tags: Vec<ForumTagId>,
    pub acknowledged: bool,
    pub notified: bool,
    pub closed: bool,
}

pub struct StatusService<'a> {
    api: &'a dyn DiscordApi,
    responder: &'a dyn Responder,
    config: &'a Config,
}

impl<'a> StatusService<'a> {
    pub fn new(api: &'a dyn DiscordApi, responder: &'a dyn Responder, config: &'a Config) -> Self {
        Self {
            api,
            responder,
            config,
        }
    }

    /// Moves the invoking thread to the transition's status.
    ///
    /// Failures after the tag update are logged and recorded in the outcome rather than
    /// returned. A failed acknowledgment skips the notification, and a failed notification
    /// skips archiving.
    ///
    /// # Returns
    /// - `Ok(TransitionOutcome)` - Tags were updated
    /// - `Err(StatusError::InvalidContext)` - Not a thread of the tracking forum, nothing changed
    /// - `Err(StatusError::ParentNotForum)` - Parent channel is not a forum, nothing changed
    /// - `Err(StatusError::TagNotConfigured)` - Forum lacks the status tag, nothing changed
    /// - `Err(StatusError::ExternalOperationFailed)` - A fetch or the tag update failed
    pub async fn apply(
        &self,
        invocation: &CommandInvocation,
        transition: StatusTransition,
        duplicate_of: Option<DuplicateOf>,
    ) -> Result<TransitionOutcome, StatusError> {
        let status = transition.status;
        let thread = self.validate_context(invocation).await?;

        if let Err(e) = self.responder.defer(true).await {
            tracing::warn!("Failed to defer reply for {} command: {}", status, e);
        }

        let forum = self.resolve_forum(&thread).await?;
        let target_tag = self.config.tags.id(status);
        if forum.find_tag(target_tag).is_none() {
            tracing::error!("{} tag not found in forum: {}", status, forum.name);
            self.reply_text(embed::tag_not_configured(status)).await;
            return Err(StatusError::TagNotConfigured {
                status,
                forum: forum.name,
            });
        }

        let applied_tags = compute_transition(&thread.applied_tags, status, &self.config.tags);
        if let Err(source) = self.api.set_applied_tags(thread.id, &applied_tags).await {
            tracing::error!("Failed to apply {} tag to thread {}: {}", status, thread.name, source);
            self.reply_text(embed::tag_update_failed(status)).await;
            return Err(StatusError::ExternalOperationFailed {
                operation: "apply the status tag",
                source,
            });
        }
        tracing::info!("Applied {} tag to thread: {}", status, thread.name);

        let mut outcome = TransitionOutcome {
            applied_tags,
            acknowledged: false,
            notified: false,
            closed: false,
        };

        let ack = Reply::text(embed::status_acknowledgment(status)).ephemeral();
        if let Err(e) = self.responder.respond(ack).await {
            tracing::error!("Failed to send ephemeral response: {}", e);
            return Ok(outcome);
        }
        outcome.acknowledged = true;

        let message = match duplicate_of {
            Some(original) => {
                tracing::debug!(
                    "Thread {} is a duplicate of channel {}",
                    thread.id,
                    original.channel_id
                );
                OutgoingMessage {
                    content: thread.owner_id.map(|owner| format!("<@{}>", owner)),
                    embed: embed::bug_duplicate(&original.name, &original.url),
                }
            }
            None => OutgoingMessage {
                content: None,
                embed: embed::status_notification(status),
            },
        };
        if let Err(e) = self.api.send_message(thread.id, message).await {
            tracing::error!("Failed to send {} embed to thread {}: {}", status, thread.name, e);
            return Ok(outcome);
        }
        outcome.notified = true;

        if transition.close_after {
            match self.api.archive_thread(thread.id).await {
                Ok(()) => {
                    tracing::info!("Closed thread: {}", thread.name);
                    outcome.closed = true;
                }
                Err(e) => tracing::error!("Failed to close thread {}: {}", thread.name, e),
            }
        }

        Ok(outcome)
    }

    /// Checks the invocation channel is a thread of the tracking forum.
    ///
    /// Replies with the invalid context embed before any deferral when it is not.
    async fn validate_context(
        &self,
        invocation: &CommandInvocation,
    ) -> Result<ForumThread, StatusError> {
        let thread = match self.api.thread(invocation.channel_id).await {
            Ok(thread) => thread,
            Err(source) => {
                tracing::error!("Failed to fetch channel {}: {}", invocation.channel_id, source);
                self.reply(Reply::embed(embed::generic_error()).ephemeral())
                    .await;
                return Err(StatusError::ExternalOperationFailed {
                    operation: "fetch the invoking channel",
                    source,
                });
            }
        };

        match thread {
            Some(thread) if thread.is_in_forum(self.config.tracker_forum_id) => Ok(thread),
            _ => {
                self.reply(Reply::embed(embed::invalid_thread_context()).ephemeral())
                    .await;
                Err(StatusError::InvalidContext)
            }
        }
    }

    async fn resolve_forum(&self, thread: &ForumThread) -> Result<Forum, StatusError> {
        // Validation guarantees a parent
        let parent_id = thread.parent_id.unwrap_or(self.config.tracker_forum_id);

        match self.api.forum(parent_id).await {
            Ok(Some(forum)) => Ok(forum),
            Ok(None) => {
                tracing::error!("Parent channel {} is not a forum channel", parent_id);
                self.reply_text(embed::parent_not_forum()).await;
                Err(StatusError::ParentNotForum(parent_id))
            }
            Err(source) => {
                tracing::error!("Failed to fetch parent forum {}: {}", parent_id, source);
                self.reply(Reply::embed(embed::generic_error())).await;
                Err(StatusError::ExternalOperationFailed {
                    operation: "fetch the parent forum",
                    source,
                })
            }
        }
    }

    async fn reply_text(&self, content: String) {
        self.reply(Reply::text(content).ephemeral()).await;
    }

    async fn reply(&self, reply: Reply) {
        if let Err(e) = self.responder.respond(reply).await {
            tracing::error!("Failed to send response: {}", e);
        }
    }
}
