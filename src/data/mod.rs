//! Persistence for the bot's only durable state: the set of users waiting for tester roles.

pub mod pending_tester;
