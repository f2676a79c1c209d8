use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use serenity::{all::UserId, async_trait};

use crate::{data::pending_tester::PendingTesterStore, error::store::StoreError};

/// Pending tester set kept in the `pending_tester` table.
///
/// Each operation is a single statement, so the database serializes them without an
/// application-side lock.
pub struct DatabasePendingTesterStore {
    db: DatabaseConnection,
}

impl DatabasePendingTesterStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PendingTesterStore for DatabasePendingTesterStore {
    async fn add(&self, user_id: UserId) -> Result<(), StoreError> {
        entity::prelude::PendingTester::insert(entity::pending_tester::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
        })
        // Re-queueing an already pending user is a no-op
        .on_conflict(
            OnConflict::column(entity::pending_tester::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await?;

        Ok(())
    }

    async fn remove(&self, user_id: UserId) -> Result<(), StoreError> {
        entity::prelude::PendingTester::delete_by_id(user_id.to_string())
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn contains(&self, user_id: UserId) -> Result<bool, StoreError> {
        let entry = entity::prelude::PendingTester::find_by_id(user_id.to_string())
            .one(&self.db)
            .await?;

        Ok(entry.is_some())
    }
}
