use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An extracurricular offering. The name is the registry key and is kept
/// outside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Informational only. Signups are never rejected for a full roster.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Snapshot of the registry, keyed by activity name, in seed order.
pub type ActivityCatalog = IndexMap<String, Activity>;

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
