// Shared test fixtures for activities and the application state around them.

use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::seed::seed_activities;
use crate::shell::state::AppState;
use std::sync::Arc;

pub const CHESS_CLUB: &str = "Chess Club";

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            ),
        }
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner = self.inner.with_participants(v);
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}

pub fn make_test_store() -> InMemoryActivityStore {
    InMemoryActivityStore::seeded(seed_activities())
}

pub fn make_test_state() -> AppState {
    AppState::in_memory(Arc::new(make_test_store()))
}

pub fn make_offline_test_state() -> AppState {
    let mut store = make_test_store();
    store.toggle_offline();
    AppState::in_memory(Arc::new(store))
}

#[cfg(test)]
mod activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ActivityBuilder::new()
            .description("desc")
            .schedule("sched")
            .max_participants(3)
            .participants(["a@example.com"])
            .build();

        assert_eq!(custom.description, "desc");
        assert_eq!(custom.schedule, "sched");
        assert_eq!(custom.max_participants, 3);
        assert_eq!(custom.participants, vec!["a@example.com"]);
    }
}
