//! Pending tester set.
//!
//! Users who were assigned the tester roles while not yet in the guild are queued here and
//! receive their roles when they join. The set has no metadata and never expires.
//!
//! Two backings are provided behind `PendingTesterStore`:
//! - `FilePendingTesterStore` - newline-delimited user IDs, rewritten wholesale on each change
//! - `DatabasePendingTesterStore` - a SeaORM table, used when `DATABASE_URL` is configured

pub mod database;
pub mod file;

#[cfg(test)]
mod test;

use serenity::{all::UserId, async_trait};

use crate::error::store::StoreError;

pub use database::DatabasePendingTesterStore;
pub use file::FilePendingTesterStore;

/// Durable set of user IDs awaiting the tester roles.
///
/// Adding a present ID and removing an absent ID are no-ops. Implementations must serialize all
/// three operations against each other.
#[async_trait]
pub trait PendingTesterStore: Send + Sync {
    async fn add(&self, user_id: UserId) -> Result<(), StoreError>;

    async fn remove(&self, user_id: UserId) -> Result<(), StoreError>;

    async fn contains(&self, user_id: UserId) -> Result<bool, StoreError>;
}
