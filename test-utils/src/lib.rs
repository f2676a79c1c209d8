//! Stacker Test Utils
//!
//! Shared testing utilities for the Stacker bot. Provides a builder for in-memory SQLite test
//! contexts, factories for seeding entities, and factories for serenity model objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::PendingTester;
//!
//! #[tokio::test]
//! async fn test_pending_tester_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(PendingTester)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
