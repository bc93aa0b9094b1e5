use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(activity: &Activity, command: &UnregisterFromActivity) -> Decision {
    if !activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered,
        };
    }

    Decision::Accepted {
        events: vec![RosterEvent::ParticipantUnregisteredV1 {
            activity_name: command.activity_name.clone(),
            email: command.email.clone(),
        }],
    }
}
