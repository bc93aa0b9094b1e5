use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::ports::RosterStoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] RosterStoreError),
}
