use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activities keyed by their unique name.
pub type ActivityCatalogue = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Signups beyond it are still accepted.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn position_of(&self, email: &str) -> Option<usize> {
        self.participants.iter().position(|p| p == email)
    }

    pub fn is_participant(&self, email: &str) -> bool {
        self.position_of(email).is_some()
    }
}
