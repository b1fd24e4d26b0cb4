#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    ParticipantAdded { email: String },
    ParticipantRemoved { position: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { change: RosterChange },
    Rejected { reason: DecideError },
}
