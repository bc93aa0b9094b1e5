// Shared activity fixtures: the two-activity registry every roster test starts from.

use crate::modules::activities::adapters::outbound::roster_in_memory::InMemoryRoster;
use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use crate::shell::state::AppState;
use rstest::fixture;
use std::sync::Arc;

#[fixture]
pub fn chess_club() -> Activity {
    Activity::new(
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    )
}

#[fixture]
pub fn programming_class() -> Activity {
    Activity::new(
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    )
}

#[fixture]
pub fn test_catalog() -> ActivityCatalog {
    ActivityCatalog::from([
        ("Chess Club".to_string(), chess_club()),
        ("Programming Class".to_string(), programming_class()),
    ])
}

#[fixture]
pub fn roster() -> InMemoryRoster {
    InMemoryRoster::with_activities(test_catalog())
}

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(roster()))
}

pub fn make_offline_state() -> AppState {
    let mut roster = roster();
    roster.toggle_offline();
    AppState::new(Arc::new(roster))
}
