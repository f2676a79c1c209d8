use std::{num::NonZeroU64, path::PathBuf};

use serenity::all::{ChannelId, GuildId, RoleId};

use crate::{error::config::ConfigError, model::tag::TagTable};

const DEFAULT_PENDING_TESTERS_PATH: &str = "pending_testers.txt";

/// Fixed identifiers and connection settings, built once at startup.
pub struct Config {
    pub discord_bot_token: String,

    pub guild_id: GuildId,
    pub tracker_forum_id: ChannelId,

    /// Role a member must hold to run any bot command
    pub required_role_id: RoleId,
    /// Tester roles, granted in this order
    pub tester_role_ids: [RoleId; 2],

    pub tags: TagTable,

    pub pending_testers_path: PathBuf,
    /// When set, pending testers are kept in this SQLite database instead of the flat file
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any name-to-value lookup.
    ///
    /// Empty or whitespace-only values are treated as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable is present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidId)` - An ID variable is not a non-zero integer
    /// - `Err(ConfigError::DuplicateTag)` - Two tag variables share a value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let tags = TagTable::new(
            [
                snowflake(&lookup, "TAG_PENDING_ID")?,
                snowflake(&lookup, "TAG_IN_PROGRESS_ID")?,
                snowflake(&lookup, "TAG_INVESTIGATING_ID")?,
                snowflake(&lookup, "TAG_FIXED_ID")?,
                snowflake(&lookup, "TAG_RESOLVED_ID")?,
                snowflake(&lookup, "TAG_DUPLICATE_ID")?,
            ],
            [
                snowflake(&lookup, "TAG_BUG_ID")?,
                snowflake(&lookup, "TAG_FEATURE_ID")?,
                snowflake(&lookup, "TAG_FEEDBACK_ID")?,
            ],
        )?;

        Ok(Self {
            discord_bot_token: required(&lookup, "DISCORD_BOT_TOKEN")?,
            guild_id: snowflake(&lookup, "DISCORD_GUILD_ID")?,
            tracker_forum_id: snowflake(&lookup, "TRACKER_FORUM_ID")?,
            required_role_id: snowflake(&lookup, "REQUIRED_ROLE_ID")?,
            tester_role_ids: [
                snowflake(&lookup, "TESTER_ROLE_PRIMARY_ID")?,
                snowflake(&lookup, "TESTER_ROLE_SECONDARY_ID")?,
            ],
            tags,
            pending_testers_path: lookup("PENDING_TESTERS_PATH")
                .unwrap_or_else(|| DEFAULT_PENDING_TESTERS_PATH.to_string())
                .into(),
            database_url: lookup("DATABASE_URL"),
        })
    }
}

fn required(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String, ConfigError> {
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn snowflake<T: From<NonZeroU64>>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<T, ConfigError> {
    let value = required(lookup, name)?;

    value
        .parse::<NonZeroU64>()
        .map(T::from)
        .map_err(|_| ConfigError::InvalidId {
            name: name.to_string(),
            value,
        })
}
