use thiserror::Error;

use crate::error::discord::DiscordError;

/// A tester role grant that did not go through.
///
/// Roles are granted in order, so a primary failure means neither role was added.
#[derive(Error, Debug)]
pub enum RoleGrantError {
    #[error("Failed to assign the primary tester role")]
    Primary(#[source] DiscordError),

    /// The primary role was added, the secondary was not.
    #[error("Failed to assign the secondary tester role")]
    Secondary(#[source] DiscordError),
}
