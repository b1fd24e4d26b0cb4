use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision, RosterChange};

pub fn decide_sign_up(activity: &Activity, email: &str) -> Decision {
    if activity.is_participant(email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    Decision::Accepted {
        change: RosterChange::ParticipantAdded {
            email: email.to_string(),
        },
    }
}

pub fn decide_unregister(activity: &Activity, email: &str) -> Decision {
    match activity.position_of(email) {
        Some(position) => Decision::Accepted {
            change: RosterChange::ParticipantRemoved { position },
        },
        None => Decision::Rejected {
            reason: DecideError::NotSignedUp,
        },
    }
}

#[cfg(test)]
mod activity_roster_decide_tests {
    use super::*;
    use crate::tests::fixtures::activities::ActivityBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn chess_club() -> Activity {
        ActivityBuilder::new()
            .participants(["michael@mergington.edu", "daniel@mergington.edu"])
            .build()
    }

    #[rstest]
    fn it_should_accept_a_new_participant(chess_club: Activity) {
        let decision = decide_sign_up(&chess_club, "new@mergington.edu");
        assert_eq!(
            decision,
            Decision::Accepted {
                change: RosterChange::ParticipantAdded {
                    email: "new@mergington.edu".into()
                }
            }
        );
    }

    #[rstest]
    fn it_should_reject_a_duplicate_sign_up(chess_club: Activity) {
        let decision = decide_sign_up(&chess_club, "daniel@mergington.edu");
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::AlreadySignedUp
            }
        );
    }

    #[rstest]
    fn it_should_accept_a_sign_up_beyond_the_advisory_capacity() {
        let full = ActivityBuilder::new()
            .max_participants(1)
            .participants(["only@mergington.edu"])
            .build();
        let decision = decide_sign_up(&full, "extra@mergington.edu");
        assert!(matches!(decision, Decision::Accepted { .. }));
    }

    #[rstest]
    fn it_should_remove_the_participant_at_its_position(chess_club: Activity) {
        let decision = decide_unregister(&chess_club, "daniel@mergington.edu");
        assert_eq!(
            decision,
            Decision::Accepted {
                change: RosterChange::ParticipantRemoved { position: 1 }
            }
        );
    }

    #[rstest]
    fn it_should_reject_unregistering_a_non_participant(chess_club: Activity) {
        let decision = decide_unregister(&chess_club, "stranger@mergington.edu");
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::NotSignedUp
            }
        );
    }
}
