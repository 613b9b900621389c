//! Failure taxonomy and the JSON error envelope.
//!
//! Client faults (4xx) render as `{status: "fail", data: {...}}` with
//! field-addressable detail; server faults (5xx) render as
//! `{status: "error", message: "..."}` with an opaque message only.

use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse, ResponseError};
use std::collections::BTreeMap;
use thiserror::Error;

pub const NOTE_NOT_FOUND_MESSAGE: &str = "This note does not exist!";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", NOTE_NOT_FOUND_MESSAGE)]
    NoteNotFound,

    /// One message per field that failed the non-empty-after-trim rule
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    /// Malformed request (unparseable body or query string)
    #[error("bad request")]
    BadRequest(BTreeMap<String, String>),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoteNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NoteNotFound => {
                HttpResponse::build(self.status_code()).json(serde_json::json!({
                    "status": "fail",
                    "data": { "id": NOTE_NOT_FOUND_MESSAGE }
                }))
            }
            ApiError::Validation(fields) | ApiError::BadRequest(fields) => {
                HttpResponse::build(self.status_code()).json(serde_json::json!({
                    "status": "fail",
                    "data": fields
                }))
            }
            ApiError::Database(e) => {
                log::error!("Database error: {}", e);
                HttpResponse::build(self.status_code()).json(serde_json::json!({
                    "status": "error",
                    "message": e.to_string()
                }))
            }
        }
    }
}

/// Reroute actix's JSON body extractor errors through the fail envelope
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let mut fields = BTreeMap::new();
    fields.insert("body".to_string(), err.to_string());
    ApiError::BadRequest(fields).into()
}

/// Reroute query string extractor errors through the fail envelope
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let mut fields = BTreeMap::new();
    fields.insert("query".to_string(), err.to_string());
    ApiError::BadRequest(fields).into()
}

/// A non-integer `{id}` segment can never match a note, so it reports
/// the same 404 as a missing one.
pub fn path_error_handler(_err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::NoteNotFound.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_not_found_envelope() {
        let err = ApiError::NoteNotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = body_json(err.error_response()).await;
        assert_eq!(body["status"], "fail");
        assert_eq!(body["data"]["id"], NOTE_NOT_FOUND_MESSAGE);
    }

    #[actix_web::test]
    async fn test_validation_envelope_is_field_addressable() {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), "This value should not be blank.".to_string());
        let err = ApiError::Validation(fields);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(err.error_response()).await;
        assert_eq!(body["status"], "fail");
        assert_eq!(body["data"]["title"], "This value should not be blank.");
    }

    #[actix_web::test]
    async fn test_server_fault_envelope_has_message_only() {
        let err = ApiError::Database(rusqlite::Error::InvalidQuery);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(err.error_response()).await;
        assert_eq!(body["status"], "error");
        assert!(body["message"].is_string());
        assert!(body.get("data").is_none());
    }
}
