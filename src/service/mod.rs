//! Bug-tracking workflow logic.
//!
//! Services operate on the crate's own models and reach Discord only through the traits in
//! `discord`, so each workflow can be driven by the recording mocks in tests.

pub mod discord;
pub mod embed;
pub mod permission;
pub mod status;
pub mod tag;
pub mod tester;
pub mod thread;

#[cfg(test)]
mod test;
