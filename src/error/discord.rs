use thiserror::Error;

/// Failure of a call against the Discord API.
#[derive(Error, Debug)]
pub enum DiscordError {
    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Api(#[from] Box<serenity::Error>),

    /// Discord refused or could not complete the request.
    ///
    /// Used where the failure is not backed by a serenity error value.
    #[error("Discord request failed: {0}")]
    Rejected(String),
}

impl From<serenity::Error> for DiscordError {
    fn from(err: serenity::Error) -> Self {
        DiscordError::Api(Box::new(err))
    }
}
