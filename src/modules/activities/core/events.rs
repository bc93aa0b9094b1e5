#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    ParticipantSignedUpV1 { activity_name: String, email: String },
    ParticipantUnregisteredV1 { activity_name: String, email: String },
}

impl RosterEvent {
    pub fn activity_name(&self) -> &str {
        match self {
            RosterEvent::ParticipantSignedUpV1 { activity_name, .. }
            | RosterEvent::ParticipantUnregisteredV1 { activity_name, .. } => activity_name,
        }
    }
}
