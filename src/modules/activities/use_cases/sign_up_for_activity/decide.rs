use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(activity: &Activity, command: &SignUpForActivity) -> Decision {
    if activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadyRegistered,
        };
    }

    // max_participants is not checked here: capacity is informational until
    // the school decides whether a full roster should turn students away.
    Decision::Accepted {
        events: vec![RosterEvent::ParticipantSignedUpV1 {
            activity_name: command.activity_name.clone(),
            email: command.email.clone(),
        }],
    }
}
