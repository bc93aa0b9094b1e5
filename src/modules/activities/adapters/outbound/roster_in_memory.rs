// In memory roster store.
//
// Purpose
// - Hold the activity registry for the lifetime of the process.
//
// Responsibilities
// - Serve copies of the registry to the query side, in seed order.
// - Decide and apply roster changes while holding the write lock, so every
//   signup or unregister is one exclusive check-then-mutate step.
// - Restore the seed on demand so tests never depend on leftover state.

use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use crate::modules::activities::core::catalog::seed_catalog;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::ports::{
    Decider, LoadedActivity, RosterStore, RosterStoreError,
};
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredActivity {
    activity: Activity,
    version: i64,
}

pub struct InMemoryRoster {
    seed: ActivityCatalog,
    activities: RwLock<IndexMap<String, StoredActivity>>,
    is_offline: bool,
    delay_apply_ms: AtomicU64,
}

impl InMemoryRoster {
    pub fn seeded() -> Self {
        Self::with_activities(seed_catalog())
    }

    pub fn with_activities(catalog: ActivityCatalog) -> Self {
        let seed: ActivityCatalog = catalog
            .into_iter()
            .filter(|(name, _)| {
                if name.is_empty() {
                    tracing::warn!("skipping activity with an empty name");
                }
                !name.is_empty()
            })
            .collect();
        Self {
            activities: RwLock::new(Self::stored(&seed)),
            seed,
            is_offline: false,
            delay_apply_ms: AtomicU64::new(0),
        }
    }

    fn stored(catalog: &ActivityCatalog) -> IndexMap<String, StoredActivity> {
        catalog
            .iter()
            .map(|(name, activity)| {
                (
                    name.clone(),
                    StoredActivity {
                        activity: activity.clone(),
                        version: 0,
                    },
                )
            })
            .collect()
    }

    /// Drop every change made since construction.
    pub async fn reset(&self) {
        *self.activities.write().await = Self::stored(&self.seed);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Hold the write lock this long before deciding, so tests can pile
    /// writers up behind it.
    pub fn set_delay_apply_ms(&self, delay_ms: u64) {
        self.delay_apply_ms.store(delay_ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), RosterStoreError> {
        if self.is_offline {
            return Err(RosterStoreError::Backend("Roster store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryRoster {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait::async_trait]
impl RosterStore for InMemoryRoster {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, RosterStoreError> {
        self.ensure_online()?;
        let guard = self.activities.read().await;
        Ok(guard.get(activity_name).map(|stored| LoadedActivity {
            activity: stored.activity.clone(),
            version: stored.version,
        }))
    }

    async fn apply(
        &self,
        activity_name: &str,
        decide: Decider<'_>,
    ) -> Result<Decision, RosterStoreError> {
        self.ensure_online()?;

        let mut guard = self.activities.write().await;
        let delay_ms = self.delay_apply_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let stored = guard
            .get_mut(activity_name)
            .ok_or_else(|| RosterStoreError::UnknownActivity(activity_name.to_string()))?;

        let decision = decide(&stored.activity);
        if let Decision::Accepted { events } = &decision {
            if let Some(stray) = events.iter().find(|e| e.activity_name() != activity_name) {
                return Err(RosterStoreError::Backend(format!(
                    "event for {} applied to {activity_name}",
                    stray.activity_name()
                )));
            }
            stored.activity = events
                .iter()
                .cloned()
                .fold(stored.activity.clone(), evolve);
            stored.version += events.len() as i64;
        }
        Ok(decision)
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryRoster {
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalog> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Roster store offline"));
        }
        let guard = self.activities.read().await;
        Ok(guard
            .iter()
            .map(|(name, stored)| (name.clone(), stored.activity.clone()))
            .collect())
    }

    async fn find_activity(&self, name: &str) -> anyhow::Result<Option<Activity>> {
        let loaded = self.load(name).await?;
        Ok(loaded.map(|loaded| loaded.activity))
    }
}
