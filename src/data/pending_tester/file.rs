use std::{
    collections::BTreeSet,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serenity::{all::UserId, async_trait};
use tokio::sync::Mutex;

use crate::{data::pending_tester::PendingTesterStore, error::store::StoreError};

/// Pending tester set kept in a plain-text file, one user ID per line.
///
/// A missing file reads as an empty set. Blank lines are skipped and surrounding whitespace is
/// trimmed. Every change rewrites the whole file.
pub struct FilePendingTesterStore {
    path: PathBuf,
    /// Held across each read-modify-write cycle
    lock: Mutex<()>,
}

impl FilePendingTesterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeSet<String>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn write_all(&self, ids: &BTreeSet<String>) -> Result<(), StoreError> {
        let mut contents = String::new();
        for id in ids {
            contents.push_str(id);
            contents.push('\n');
        }

        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl PendingTesterStore for FilePendingTesterStore {
    async fn add(&self, user_id: UserId) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        let mut ids = self.read_all().await?;
        if ids.insert(user_id.to_string()) {
            self.write_all(&ids).await?;
        }

        Ok(())
    }

    async fn remove(&self, user_id: UserId) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        let mut ids = self.read_all().await?;
        if ids.remove(&user_id.to_string()) {
            self.write_all(&ids).await?;
        }

        Ok(())
    }

    async fn contains(&self, user_id: UserId) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;

        Ok(self.read_all().await?.contains(&user_id.to_string()))
    }
}
