use async_graphql::{Context, Object, Result as GqlResult};
use tracing::error;

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<(String, Activity)> for GqlActivity {
    fn from((name, a): (String, Activity)) -> Self {
        Self {
            name,
            description: a.description,
            schedule: a.schedule,
            max_participants: a.max_participants,
            participants: a.participants,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let catalogue = state.queries.list_activities().await.map_err(|e| {
            error!(error = %e, "listing activities failed");
            ApplicationError::Unexpected(e.to_string()).into_graphql_error()
        })?;
        Ok(catalogue.into_iter().map(Into::into).collect())
    }
}
