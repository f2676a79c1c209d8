use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing the pending tester set.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or rewritten.
    #[error("Failed to access pending tester file '{}': {source}", path.display())]
    Io {
        /// Path of the backing file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backing database rejected the operation.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
