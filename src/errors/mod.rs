use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::debug;
use std::fmt;

use crate::constants::{
    CODE_BAD_REQUEST, CODE_NOT_FOUND, ERR_INVALID_JSON_BODY, ERR_ROUTE_NOT_FOUND,
};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: CODE_BAD_REQUEST.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            code: CODE_NOT_FOUND.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest { code, message } => {
                HttpResponse::BadRequest().json(ErrorResponse::new(code, message))
            }
            ApiError::NotFound { code, message } => {
                HttpResponse::NotFound().json(ErrorResponse::new(code, message))
            }
        }
    }
}

/// Error handler for `web::Json` extraction failures.
///
/// Replaces actix-web's plain-text 400 with the JSON error body.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected JSON body for {} {}: {}", req.method(), req.path(), err);
    ApiError::bad_request(format!("{}: {}", ERR_INVALID_JSON_BODY, err)).into()
}

/// Fallback for requests that match no route.
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::not_found(ERR_ROUTE_NOT_FOUND))
}
