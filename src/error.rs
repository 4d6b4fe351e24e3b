use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::{Request, Response};
use serde::Serialize;
use std::io::Cursor;

use crate::auth::AuthError;

#[derive(Debug)]
pub enum ApiError {
    /// Missing or unverifiable credentials. Never reveals whether the
    /// claimed username exists.
    Unauthorized,
    /// Authenticated, but not the owner of the target resource.
    Forbidden,
    NotFound(String),
    Conflict(String),
    BadRequest(String),
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, error_type, message) = match self {
            ApiError::Unauthorized => {
                log::debug!("unauthorized request");
                (
                    Status::Unauthorized,
                    "Unauthorized",
                    "Invalid credentials".to_string(),
                )
            }
            ApiError::Forbidden => {
                log::debug!("forbidden request");
                (
                    Status::Forbidden,
                    "Forbidden",
                    "You do not own this resource".to_string(),
                )
            }
            ApiError::NotFound(msg) => {
                log::debug!("not found: {}", msg);
                (Status::NotFound, "NotFound", msg)
            }
            ApiError::Conflict(msg) => {
                log::debug!("conflict: {}", msg);
                (Status::Conflict, "Conflict", msg)
            }
            ApiError::BadRequest(msg) => {
                log::debug!("bad request: {}", msg);
                (Status::BadRequest, "BadRequest", msg)
            }
            ApiError::InternalError(msg) => {
                log::error!("internal error: {}", msg);
                (Status::InternalServerError, "InternalError", msg)
            }
        };

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        let json = serde_json::to_string(&error_response).unwrap_or_else(|_| {
            r#"{"error":"SerializationError","message":"Failed to serialize error"}"#.to_string()
        });

        Response::build()
            .status(status)
            .header(rocket::http::ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => ApiError::Unauthorized,
            AuthError::Forbidden => ApiError::Forbidden,
            other => ApiError::InternalError(other.to_string()),
        }
    }
}
