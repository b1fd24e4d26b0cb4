// Ports describe what the roster use cases need from storage, without implementing it.
// Adapters implement these traits; the in memory store backs both the service and the tests.

use crate::modules::activities::core::decision::DecideError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Roster mutations. Implementations must make the membership check and the
/// change atomic with respect to other calls on the same store.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn add_participant(&self, activity: &str, email: &str) -> Result<(), StoreError>;
    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), StoreError>;
}
