use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::RosterChange;

pub fn evolve(activity: &mut Activity, change: RosterChange) {
    match change {
        RosterChange::ParticipantAdded { email } => activity.participants.push(email),
        RosterChange::ParticipantRemoved { position } => {
            if position < activity.participants.len() {
                activity.participants.remove(position);
            }
        }
    }
}
