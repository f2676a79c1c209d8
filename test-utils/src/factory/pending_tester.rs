//! Pending tester factory for seeding the pending tester table.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating pending tester entries.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pending_tester::PendingTesterFactory;
///
/// let entry = PendingTesterFactory::new(&db)
///     .user_id(123456789)
///     .build()
///     .await?;
/// ```
pub struct PendingTesterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: u64,
}

impl<'a> PendingTesterFactory<'a> {
    /// Creates a new factory with a unique generated user ID.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PendingTesterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id(),
        }
    }

    /// Sets the Discord user ID of the entry.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Builds and inserts the entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pending_tester::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pending_tester::Model, DbErr> {
        entity::pending_tester::ActiveModel {
            user_id: ActiveValue::Set(self.user_id.to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending tester entry with a generated user ID.
///
/// Shorthand for `PendingTesterFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::pending_tester::Model)` - Created entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pending_tester(
    db: &DatabaseConnection,
) -> Result<entity::pending_tester::Model, DbErr> {
    PendingTesterFactory::new(db).build().await
}
