//! Mapping of catalog and registration failures to HTTP responses.

use crate::catalog::CatalogError;
use crate::user::RegistrationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

fn internal_error(err: &anyhow::Error) -> Response {
    error!("Store failure: {:#}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match &self {
            CatalogError::NotFound { .. } => {
                debug!("{}", self);
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            CatalogError::UnknownActor(_) | CatalogError::MalformedIdentifier(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            CatalogError::Store(err) => internal_error(err),
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        match &self {
            RegistrationError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            RegistrationError::Conflict(_) => {
                (StatusCode::CONFLICT, self.to_string()).into_response()
            }
            RegistrationError::Store(err) => internal_error(err),
        }
    }
}
