// Port the activity use cases code against.
//
// Adapters implement it; the in memory adapter is the only one so far.

use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn find(&self, name: &str) -> Result<Option<Activity>, RepositoryError>;

    /// Runs `change` on the stored record and stores the record it returns,
    /// with no other writer in between. `Ok(None)` when `name` is unknown;
    /// a rejection from `change` is handed back untouched and stores nothing.
    async fn update<TChange, TRejection>(
        &self,
        name: &str,
        change: TChange,
    ) -> Result<Option<Result<(), TRejection>>, RepositoryError>
    where
        TChange: FnOnce(&Activity) -> Result<Activity, TRejection> + Send,
        TRejection: Send;
}
