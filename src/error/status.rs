use serenity::all::ChannelId;
use thiserror::Error;

use crate::{error::discord::DiscordError, model::tag::StatusTag};

/// Reasons a status transition stopped before the tag update went through.
///
/// Every variant has already been reported to the invoking user by the time it is returned,
/// callers only need to log it.
#[derive(Error, Debug)]
pub enum StatusError {
    /// The command was used outside a thread of the tracking forum.
    #[error("Command used outside a thread of the tracking forum")]
    InvalidContext,

    /// The thread's parent channel exists but is not a forum channel.
    #[error("Parent channel {0} is not a forum channel")]
    ParentNotForum(ChannelId),

    /// The configured tag for the target status is missing from the forum's tag list.
    #[error("The {status} tag is not configured in forum '{forum}'")]
    TagNotConfigured {
        /// Status whose tag could not be found
        status: StatusTag,
        /// Name of the forum that was searched
        forum: String,
    },

    /// A Discord call required by the transition failed.
    #[error("Failed to {operation}: {source}")]
    ExternalOperationFailed {
        /// Short description of the failed call
        operation: &'static str,
        /// The underlying Discord error
        #[source]
        source: DiscordError,
    },
}
