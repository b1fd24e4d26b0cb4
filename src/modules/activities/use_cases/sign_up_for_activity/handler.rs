use crate::modules::activities::application::confirmation::Confirmation;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::ports::{ActivityRepository, StoreError};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct SignUpForActivity {
    pub activity: String,
    pub email: String,
}

pub struct SignUpForActivityHandler<TRepository>
where
    TRepository: ActivityRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> SignUpForActivityHandler<TRepository>
where
    TRepository: ActivityRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        command: SignUpForActivity,
    ) -> Result<Confirmation, ApplicationError> {
        match self
            .repository
            .add_participant(&command.activity, &command.email)
            .await
        {
            Ok(()) => {
                info!(activity = %command.activity, email = %command.email, "participant signed up");
                Ok(Confirmation::signed_up(&command.email, &command.activity))
            }
            Err(StoreError::Backend(message)) => {
                error!(activity = %command.activity, %message, "sign up failed");
                Err(ApplicationError::Unexpected(message))
            }
            Err(rejection) => {
                warn!(activity = %command.activity, email = %command.email, %rejection, "sign up rejected");
                Err(rejection.into())
            }
        }
    }
}
