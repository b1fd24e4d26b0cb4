use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::ports::StoreError;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::ActivityNotFound(_) => Self::NotFound("Activity not found".into()),
            StoreError::Rejected(reason @ DecideError::AlreadySignedUp) => {
                Self::BadRequest(reason.to_string())
            }
            StoreError::Rejected(reason @ DecideError::NotSignedUp) => {
                Self::NotFound(reason.to_string())
            }
            StoreError::Backend(message) => Self::Unexpected(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = self.client_message();
        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl ApplicationError {
    /// Message safe to show a caller. Backend details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::Unexpected(_) => INTERNAL_SERVER_ERROR.to_string(),
            other => other.to_string(),
        }
    }

    pub fn into_graphql_error(self) -> async_graphql::Error {
        async_graphql::Error::new(self.client_message())
    }
}

#[cfg(test)]
mod activities_application_error_tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(
        StoreError::ActivityNotFound("Nope".into()),
        ApplicationError::NotFound("Activity not found".into())
    )]
    #[case(
        StoreError::Rejected(DecideError::AlreadySignedUp),
        ApplicationError::BadRequest("Student is already signed up".into())
    )]
    #[case(
        StoreError::Rejected(DecideError::NotSignedUp),
        ApplicationError::NotFound("Student is not signed up for this activity".into())
    )]
    #[case(
        StoreError::Backend("offline".into()),
        ApplicationError::Unexpected("offline".into())
    )]
    fn it_should_map_store_errors(#[case] error: StoreError, #[case] expected: ApplicationError) {
        assert_eq!(ApplicationError::from(error), expected);
    }

    #[rstest]
    #[case(ApplicationError::NotFound("Activity not found".into()), StatusCode::NOT_FOUND, "Activity not found")]
    #[case(ApplicationError::BadRequest("Student is already signed up".into()), StatusCode::BAD_REQUEST, "Student is already signed up")]
    #[case(ApplicationError::Unexpected("offline".into()), StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")]
    #[tokio::test]
    async fn it_should_respond_with_status_and_detail(
        #[case] error: ApplicationError,
        #[case] status: StatusCode,
        #[case] detail: &str,
    ) {
        let response = error.into_response();
        assert_eq!(response.status(), status);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "detail": detail }));
    }

    #[rstest]
    #[case(ApplicationError::NotFound("Activity not found".into()), "Activity not found")]
    #[case(ApplicationError::BadRequest("Student is already signed up".into()), "Student is already signed up")]
    #[case(ApplicationError::Unexpected("Activity store offline".into()), "Internal server error")]
    fn it_should_hide_backend_details_from_graphql_callers(
        #[case] error: ApplicationError,
        #[case] message: &str,
    ) {
        assert_eq!(error.into_graphql_error().message, message);
    }
}
