use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::ports::RosterStore;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::execute::execute;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: RosterStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: RosterStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UnregisterFromActivity) -> Result<String, ApplicationError> {
        let decide = |activity: &Activity| decide_unregister(activity, &command);
        execute(&*self.store, &command.activity_name, &decide).await?;

        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            "participant unregistered"
        );
        Ok(command.confirmation())
    }
}

#[cfg(test)]
mod unregister_from_activity_handler_tests {
    use super::*;
    use crate::modules::activities::adapters::outbound::roster_in_memory::InMemoryRoster;
    use crate::modules::activities::core::decision::DecideError;
    use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
    use crate::modules::activities::core::activity::ActivityCatalog;
    use crate::tests::fixtures::activities::{chess_club, roster};
    use rstest::rstest;
    use tokio::join;

    #[rstest]
    #[tokio::test]
    async fn handle_unregister_removes_the_participant(roster: InMemoryRoster) {
        let roster = Arc::new(roster);
        let handler = UnregisterFromActivityHandler::new(roster.clone());
        let message = handler
            .handle(UnregisterFromActivity::new(
                "Chess Club",
                "michael@mergington.edu",
            ))
            .await
            .expect("handle failed");
        assert_eq!(message, "Unregistered michael@mergington.edu from Chess Club");
        let catalog = roster.list_activities().await.unwrap();
        assert_eq!(
            catalog["Chess Club"].participants,
            vec!["daniel@mergington.edu"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_unregister_fails_for_an_unknown_activity(roster: InMemoryRoster) {
        let handler = UnregisterFromActivityHandler::new(Arc::new(roster));
        let result = handler
            .handle(UnregisterFromActivity::new(
                "Nonexistent Club",
                "test@mergington.edu",
            ))
            .await;
        assert_eq!(result, Err(ApplicationError::ActivityNotFound));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_unregister_rejects_an_unknown_participant(roster: InMemoryRoster) {
        let roster = Arc::new(roster);
        let handler = UnregisterFromActivityHandler::new(roster.clone());
        let result = handler
            .handle(UnregisterFromActivity::new(
                "Chess Club",
                "notregistered@mergington.edu",
            ))
            .await;
        assert_eq!(
            result,
            Err(ApplicationError::Rejected(DecideError::NotRegistered))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Student not registered for this activity"
        );
        let catalog = roster.list_activities().await.unwrap();
        assert_eq!(catalog["Chess Club"].participants.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_concurrent_unregisters_remove_the_last_entry_once(roster: InMemoryRoster) {
        roster.set_delay_apply_ms(10);
        let roster = Arc::new(roster);
        let handler = UnregisterFromActivityHandler::new(roster.clone());
        let command = UnregisterFromActivity::new("Chess Club", "daniel@mergington.edu");
        let (result1, result2) = join!(handler.handle(command.clone()), handler.handle(command));
        assert!(result1.is_ok() ^ result2.is_ok());
        let err = result1.err().or(result2.err()).unwrap();
        assert_eq!(err, ApplicationError::Rejected(DecideError::NotRegistered));
        let catalog = roster.list_activities().await.unwrap();
        assert_eq!(
            catalog["Chess Club"].participants,
            vec!["michael@mergington.edu"]
        );
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn handle_many_parallel_distinct_unregisters_all_land(mut chess_club: Activity) {
        const STUDENTS: usize = 100;
        chess_club
            .participants
            .extend((0..STUDENTS).map(|i| format!("student{i}@mergington.edu")));
        let roster = Arc::new(InMemoryRoster::with_activities(ActivityCatalog::from([(
            "Chess Club".to_string(),
            chess_club,
        )])));
        let handler = Arc::new(UnregisterFromActivityHandler::new(roster.clone()));

        let tasks: Vec<_> = (0..STUDENTS)
            .map(|i| {
                let handler = handler.clone();
                tokio::spawn(async move {
                    handler
                        .handle(UnregisterFromActivity::new(
                            "Chess Club",
                            format!("student{i}@mergington.edu"),
                        ))
                        .await
                })
            })
            .collect();
        for task in tasks {
            let result = task.await.expect("task panicked");
            assert!(result.is_ok(), "unregister failed: {result:?}");
        }

        let catalog = roster.list_activities().await.unwrap();
        assert_eq!(
            catalog["Chess Club"].participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }
}
