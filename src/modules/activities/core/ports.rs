// Ports describe what the roster core needs from storage, without implementing it.
//
// Responsibilities
// - Load one activity together with the number of roster changes applied to it.
// - Run a decision against the live activity and apply the accepted events
//   as one exclusive check-then-mutate step.
//
// Adapters implement these traits in the adapters layer.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterStoreError {
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: i64,
}

/// Pure decision run while the store holds the activity exclusively.
pub type Decider<'a> = &'a (dyn Fn(&Activity) -> Decision + Send + Sync);

#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, RosterStoreError>;

    /// No other writer can observe or change the activity between `decide`
    /// reading it and its accepted events being applied.
    async fn apply(
        &self,
        activity_name: &str,
        decide: Decider<'_>,
    ) -> Result<Decision, RosterStoreError>;
}
