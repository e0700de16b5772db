use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::utils::helpers::service_name;

#[derive(Debug, Error, PartialEq)]
pub enum CustomError {
    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),
}

impl CustomError {
    pub fn error_code(&self) -> &'static str {
        match *self {
            CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
            CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
            CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
            CustomError::ValidationError(..) => "VALIDATION_ERROR",
        }
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": self.error_code(),
            "service": service_name(),
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}

impl From<CustomError> for std::io::Error {
    fn from(err: CustomError) -> Self {
        std::io::Error::other(err.to_string())
    }
}
