//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON shaped like Discord's
//! API payloads, so tests can exercise code that reads serenity models without a gateway.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_forum, create_test_thread};
//!
//! let forum = create_test_forum(200, 100, "tester-log", &[(1, "Pending"), (2, "Fixed")]);
//! let thread = create_test_thread(300, 100, 200, 500, "Crash on start", &[1]);
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_forum` - Forum channel with available tags
//! - `channel::create_test_thread` - Public thread with applied tags
//! - `channel::create_test_text_channel` - Plain text channel
//! - `member::create_test_member` - Guild member with roles

pub mod channel;
pub mod member;

pub use channel::{create_test_forum, create_test_text_channel, create_test_thread};
pub use member::create_test_member;
