use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister(
        &self,
        context: &Context<'_>,
        activity: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let confirmation = state
            .unregister_handler
            .handle(UnregisterFromActivity { activity, email })
            .await
            .map_err(ApplicationError::into_graphql_error)?;
        Ok(confirmation.message)
    }
}
