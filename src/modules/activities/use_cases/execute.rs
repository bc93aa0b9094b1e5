use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::core::ports::{Decider, RosterStore, RosterStoreError};
use crate::modules::activities::use_cases::errors::ApplicationError;

/// Run `decide` against the live activity and keep the accepted events.
/// The store holds the activity exclusively for the whole step.
pub async fn execute<TStore>(
    store: &TStore,
    activity_name: &str,
    decide: Decider<'_>,
) -> Result<Vec<RosterEvent>, ApplicationError>
where
    TStore: RosterStore + ?Sized,
{
    match store.apply(activity_name, decide).await {
        Ok(Decision::Accepted { events }) => Ok(events),
        Ok(Decision::Rejected { reason }) => Err(reason.into()),
        Err(RosterStoreError::UnknownActivity(_)) => Err(ApplicationError::ActivityNotFound),
        Err(e) => Err(e.into()),
    }
}
