use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::ports::RosterStore;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::execute::execute;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: RosterStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: RosterStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the confirmation message shown to the student.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        let decide = |activity: &Activity| decide_sign_up(activity, &command);
        execute(&*self.store, &command.activity_name, &decide).await?;

        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            "participant signed up"
        );
        Ok(command.confirmation())
    }
}
