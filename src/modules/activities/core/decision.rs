use crate::modules::activities::core::events::RosterEvent;

/// Display text doubles as the `detail` returned to clients.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<RosterEvent> },
    Rejected { reason: DecideError },
}
