use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::tests::fixtures::activities::make_test_state;

#[tokio::test]
async fn sign_up_then_unregister_restores_the_roster() {
    let state = make_test_state();
    let before = state.queries.list_activities().await.unwrap();

    state
        .sign_up_handler
        .handle(SignUpForActivity::new("Chess Club", "newstudent@mergington.edu"))
        .await
        .unwrap();
    let during = state.queries.list_activities().await.unwrap();
    assert_eq!(
        during["Chess Club"].participants.len(),
        before["Chess Club"].participants.len() + 1
    );

    state
        .unregister_handler
        .handle(UnregisterFromActivity::new("Chess Club", "newstudent@mergington.edu"))
        .await
        .unwrap();
    let after = state.queries.list_activities().await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn participant_count_tracks_successful_operations() {
    let state = make_test_state();
    let emails = [
        "test1@mergington.edu",
        "test2@mergington.edu",
        "test3@mergington.edu",
    ];
    let initial = state.queries.list_activities().await.unwrap()["Programming Class"]
        .participants
        .len();

    for email in emails {
        state
            .sign_up_handler
            .handle(SignUpForActivity::new("Programming Class", email))
            .await
            .unwrap();
    }
    for email in &emails[..2] {
        state
            .unregister_handler
            .handle(UnregisterFromActivity::new("Programming Class", *email))
            .await
            .unwrap();
    }

    // Rejected operations must not move the count.
    assert_eq!(
        state
            .sign_up_handler
            .handle(SignUpForActivity::new("Programming Class", emails[2]))
            .await,
        Err(ApplicationError::Rejected(DecideError::AlreadyRegistered))
    );
    assert_eq!(
        state
            .unregister_handler
            .handle(UnregisterFromActivity::new("Programming Class", emails[0]))
            .await,
        Err(ApplicationError::Rejected(DecideError::NotRegistered))
    );

    let participants = state.queries.list_activities().await.unwrap()["Programming Class"]
        .participants
        .clone();
    assert_eq!(participants.len(), initial + 3 - 2);
    assert!(!participants.contains(&emails[0].to_string()));
    assert!(!participants.contains(&emails[1].to_string()));
    assert!(participants.contains(&emails[2].to_string()));
}

#[tokio::test]
async fn unknown_activities_are_not_found_for_every_operation() {
    let state = make_test_state();
    for name in ["Nonexistent Club", "", "chess club"] {
        assert_eq!(
            state
                .sign_up_handler
                .handle(SignUpForActivity::new(name, "test@mergington.edu"))
                .await,
            Err(ApplicationError::ActivityNotFound)
        );
        assert_eq!(
            state
                .unregister_handler
                .handle(UnregisterFromActivity::new(name, "test@mergington.edu"))
                .await,
            Err(ApplicationError::ActivityNotFound)
        );
    }
}
