use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

// Non-standard nginx status for a client that went away mid-request.
const CLIENT_CLOSED_REQUEST: u16 = 499;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    ClientClosed,
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::AlreadySeeded(msg) => HttpError::BadRequest(msg),

            ServiceError::Canceled => HttpError::ClientClosed,

            ServiceError::Repo(_) => HttpError::Internal("Repository error".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::ClientClosed => (
                StatusCode::from_u16(CLIENT_CLOSED_REQUEST)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "Client closed request.".to_string(),
            ),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { message: msg });

        (status, body).into_response()
    }
}
