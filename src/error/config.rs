use serenity::all::ForumTagId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the `.env.example`
    /// file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but is not a non-zero Discord snowflake.
    #[error("Environment variable {name} is not a valid Discord ID: '{value}'")]
    InvalidId {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// The same tag ID was configured for two different tags.
    ///
    /// Tag classification must be unambiguous, otherwise a status transition could strip a
    /// label tag or keep a stale status tag.
    #[error("Tag ID {0} is configured for more than one tag")]
    DuplicateTag(ForumTagId),
}
