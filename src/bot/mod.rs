//! Discord gateway integration.
//!
//! Connects the bot to Discord, registers the slash commands in the configured guild, and
//! routes gateway events to the workflow services.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive channel and thread creation events
//! - `GUILD_MEMBERS` - Receive member join events (privileged intent)
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
