use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::RosterEvent;

pub fn evolve(mut activity: Activity, event: RosterEvent) -> Activity {
    match event {
        RosterEvent::ParticipantSignedUpV1 { email, .. } => {
            activity.participants.push(email);
        }
        RosterEvent::ParticipantUnregisteredV1 { email, .. } => {
            if let Some(index) = activity.participants.iter().position(|p| *p == email) {
                activity.participants.remove(index);
            }
        }
    }
    activity
}
