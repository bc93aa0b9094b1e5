use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    /// Copy of every activity keyed by name. Callers never see the live registry.
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalog>;

    async fn find_activity(&self, name: &str) -> anyhow::Result<Option<Activity>>;
}
