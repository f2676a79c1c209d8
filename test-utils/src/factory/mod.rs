//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let entry = factory::pending_tester::create_pending_tester(&db).await?;
//!
//! let entry = factory::pending_tester::PendingTesterFactory::new(&db)
//!     .user_id(123456789)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod pending_tester;
