// In memory implementation of the ActivityRepository and ActivityQueries ports.
//
// Purpose
// - Back the service for the lifetime of the process. Nothing survives a restart.
//
// Responsibilities
// - Serialize every check-then-mutate behind the write lock, so concurrent
//   sign ups and unregisters never overwrite each other.

use crate::modules::activities::adapters::outbound::activity_repository::{
    ActivityRepository, RepositoryError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::catalog::seed_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityRepository {
    rows: RwLock<BTreeMap<String, Activity>>,
    is_offline: bool,
    delay_update_ms: AtomicU64,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            rows: RwLock::new(activities),
            ..Self::default()
        }
    }

    pub fn seeded() -> Self {
        Self::with_activities(seed_activities())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds the write lock this long before every update runs.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Activity repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find(&self, name: &str) -> Result<Option<Activity>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(name).cloned())
    }

    async fn update<TChange, TRejection>(
        &self,
        name: &str,
        change: TChange,
    ) -> Result<Option<Result<(), TRejection>>, RepositoryError>
    where
        TChange: FnOnce(&Activity) -> Result<Activity, TRejection> + Send,
        TRejection: Send,
    {
        self.ensure_online()?;

        let mut guard = self.rows.write().await;

        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let Some(current) = guard.get_mut(name) else {
            return Ok(None);
        };
        Ok(Some(change(current).map(|next| *current = next)))
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityRepository {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, Activity>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity repository offline"));
        }

        Ok(self.rows.read().await.clone())
    }
}
