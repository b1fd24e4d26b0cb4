use crate::modules::activities::application::confirmation::Confirmation;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::ports::{ActivityRepository, StoreError};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct UnregisterFromActivity {
    pub activity: String,
    pub email: String,
}

pub struct UnregisterFromActivityHandler<TRepository>
where
    TRepository: ActivityRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UnregisterFromActivityHandler<TRepository>
where
    TRepository: ActivityRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<Confirmation, ApplicationError> {
        match self
            .repository
            .remove_participant(&command.activity, &command.email)
            .await
        {
            Ok(()) => {
                info!(activity = %command.activity, email = %command.email, "participant unregistered");
                Ok(Confirmation::unregistered(&command.email, &command.activity))
            }
            Err(StoreError::Backend(message)) => {
                error!(activity = %command.activity, %message, "unregister failed");
                Err(ApplicationError::Unexpected(message))
            }
            Err(rejection) => {
                warn!(activity = %command.activity, email = %command.email, %rejection, "unregister rejected");
                Err(rejection.into())
            }
        }
    }
}
