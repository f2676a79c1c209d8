//! Domain models shared by the services and the bot handlers.
//!
//! These types are deliberately smaller than their serenity counterparts: they carry only what
//! the bug-tracking workflow reads, which keeps the services testable without a gateway.

pub mod command;
pub mod member;
pub mod message;
pub mod tag;
pub mod thread;
