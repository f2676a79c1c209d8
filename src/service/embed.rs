//! Every message the bot shows to Discord users.
//!
//! Keeping the wording in one place keeps status embeds consistent between commands.

use crate::model::{message::Embed, tag::StatusTag};

pub const COLOUR_SUCCESS: u32 = 0x57F287;
pub const COLOUR_ERROR: u32 = 0xED4245;
pub const COLOUR_INFO: u32 = 0x5865F2;
pub const COLOUR_WARNING: u32 = 0xFEE75C;

const FOOTER: &str = "Stacker Bot";

fn embed(title: &str, description: impl Into<String>, colour: u32) -> Embed {
    Embed {
        title: title.to_string(),
        description: description.into(),
        colour,
        footer: None,
    }
}

fn status_embed(title: &str, description: impl Into<String>, colour: u32) -> Embed {
    Embed {
        footer: Some(FOOTER.to_string()),
        ..embed(title, description, colour)
    }
}

pub fn success(title: &str, description: impl Into<String>) -> Embed {
    embed(title, description, COLOUR_SUCCESS)
}

pub fn error(title: &str, description: impl Into<String>) -> Embed {
    embed(title, description, COLOUR_ERROR)
}

pub fn info(title: &str, description: impl Into<String>) -> Embed {
    embed(title, description, COLOUR_INFO)
}

/// Public notification posted into a thread after its status changes.
///
/// Duplicates carry the original thread in the description, see `bug_duplicate`.
pub fn status_notification(status: StatusTag) -> Embed {
    match status {
        StatusTag::Pending => status_embed(
            "⏳ Bug Pending",
            "This bug is waiting to be looked at.\n\nThank you for your report!",
            COLOUR_INFO,
        ),
        StatusTag::InProgress => status_embed(
            "🔄 Bug In Progress",
            "This bug is now being worked on. The thread will remain open for updates.\n\n\
             Thank you for your patience!",
            COLOUR_WARNING,
        ),
        StatusTag::Investigating => status_embed(
            "🔍 Bug Under Investigation",
            "This bug is being investigated. The thread will remain open for updates.\n\n\
             Thank you for your patience!",
            COLOUR_INFO,
        ),
        StatusTag::Fixed => status_embed(
            "🔧 Bug Fixed",
            "This bug has been marked as fixed and the thread is now closed.\n\n\
             Thank you for your report!",
            COLOUR_SUCCESS,
        ),
        StatusTag::Resolved => status_embed(
            "✅ Bug Resolved",
            "This bug has been resolved and the thread is now closed.\n\n\
             Thank you for your report!",
            COLOUR_SUCCESS,
        ),
        StatusTag::Duplicate => status_embed(
            "📑 Duplicate Report",
            "This thread has been marked as a duplicate and is now closed.",
            COLOUR_INFO,
        ),
    }
}

pub fn bug_duplicate(original_name: &str, original_url: &str) -> Embed {
    status_embed(
        "📑 Duplicate Report",
        format!(
            "This thread has been marked as a duplicate of **[{}]({})** and is now closed.\n\n\
             Please follow the original thread for updates.",
            original_name, original_url
        ),
        COLOUR_INFO,
    )
}

/// Ephemeral text confirming the tag update to the invoker.
pub fn status_acknowledgment(status: StatusTag) -> String {
    match status {
        StatusTag::Pending => "✅ Successfully marked this bug as pending!".to_string(),
        StatusTag::InProgress => "✅ Successfully marked this bug as in progress!".to_string(),
        StatusTag::Investigating => {
            "✅ Successfully marked this bug as being investigated!".to_string()
        }
        StatusTag::Fixed => "✅ Successfully marked this bug as fixed!".to_string(),
        StatusTag::Resolved => "✅ Successfully marked this bug as resolved!".to_string(),
        StatusTag::Duplicate => "✅ Successfully marked this thread as a duplicate!".to_string(),
    }
}

pub fn tag_not_configured(status: StatusTag) -> String {
    format!("❌ The {} tag is not configured in this forum.", status.label())
}

pub fn tag_update_failed(status: StatusTag) -> String {
    format!(
        "❌ Failed to apply the {} tag. Please check bot permissions.",
        status.label()
    )
}

pub fn parent_not_forum() -> String {
    "❌ This thread's parent channel is not a forum.".to_string()
}

pub fn invalid_context(requirement: &str) -> Embed {
    error(
        "❌ Invalid Context",
        format!("This command can only be used {}.", requirement),
    )
}

pub fn invalid_thread_context() -> Embed {
    invalid_context("in a thread within the Tester Log Forum")
}

pub fn permission_denied() -> Embed {
    error(
        "❌ Permission Denied",
        "You don't have the required role to use this command.",
    )
}

pub fn generic_error() -> Embed {
    error("Error", "An error occurred while executing the command.")
}

pub fn guild_only() -> Embed {
    error("Error", "This command can only be used in a server.")
}

pub fn tester_roles_assigned(name: &str) -> Embed {
    success(
        "✅ Tester Roles Assigned",
        format!("Successfully assigned tester roles to **{}**.", name),
    )
}

pub fn tester_pending(name: &str) -> Embed {
    info(
        "⏳ Tester Pending",
        format!(
            "**{}** is not in the server yet. Tester roles will be assigned automatically when \
             they join.",
            name
        ),
    )
}

pub fn tester_primary_role_failed() -> Embed {
    error(
        "Error",
        "Failed to assign tester roles. Please check bot permissions.",
    )
}

pub fn tester_secondary_role_failed() -> Embed {
    error(
        "Error",
        "Failed to assign all tester roles. Please check bot permissions.",
    )
}
