use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        activity: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let confirmation = state
            .sign_up_handler
            .handle(SignUpForActivity { activity, email })
            .await
            .map_err(ApplicationError::into_graphql_error)?;
        Ok(confirmation.message)
    }
}
