//! SeaORM entities for the optional SQLite backing of the bot's persisted state.

pub mod prelude;

pub mod pending_tester;
