use crate::modules::activities::adapters::outbound::roster_in_memory::InMemoryRoster;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use std::sync::Arc;

/// Everything a request needs. Built once in `main` (or per test) around a
/// single roster, and dropped with the router.
#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryRoster>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryRoster>>,
}

impl AppState {
    pub fn new(roster: Arc<InMemoryRoster>) -> Self {
        Self {
            queries: roster.clone(),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(roster.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(roster)),
        }
    }
}
