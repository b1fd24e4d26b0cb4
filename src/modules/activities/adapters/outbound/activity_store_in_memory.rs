// In memory activity store.
//
// Purpose
// - Hold the activity catalogue for the lifetime of the process.
//
// Responsibilities
// - Serve snapshots of the catalogue to queries.
// - Apply roster decisions under the write lock so concurrent requests cannot lose updates.

use crate::modules::activities::core::activity::{Activity, ActivityCatalogue};
use crate::modules::activities::core::decide::{decide_sign_up, decide_unregister};
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::ports::{ActivityRepository, StoreError};
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<ActivityCatalogue>,
    is_offline: bool,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(activities: ActivityCatalogue) -> Self {
        Self {
            activities: RwLock::new(activities),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    async fn apply<F>(&self, activity: &str, decide: F) -> Result<(), StoreError>
    where
        F: FnOnce(&Activity) -> Decision + Send,
    {
        if self.is_offline {
            return Err(StoreError::Backend("Activity store offline".into()));
        }

        let mut guard = self.activities.write().await;
        let entry = guard
            .get_mut(activity)
            .ok_or_else(|| StoreError::ActivityNotFound(activity.to_string()))?;

        match decide(&*entry) {
            Decision::Accepted { change } => {
                evolve(entry, change);
                Ok(())
            }
            Decision::Rejected { reason } => Err(StoreError::Rejected(reason)),
        }
    }
}

#[async_trait::async_trait]
impl ActivityRepository for InMemoryActivityStore {
    async fn add_participant(&self, activity: &str, email: &str) -> Result<(), StoreError> {
        self.apply(activity, |a| decide_sign_up(a, email)).await
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), StoreError> {
        self.apply(activity, |a| decide_unregister(a, email)).await
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalogue> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }

        Ok(self.activities.read().await.clone())
    }
}
