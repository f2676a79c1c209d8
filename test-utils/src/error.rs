use sea_orm::DbErr;
use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// The in-memory database could not be created or a table statement failed.
    #[error(transparent)]
    Database(#[from] DbErr),
}
