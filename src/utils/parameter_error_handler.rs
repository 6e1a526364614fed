use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::models::ApiResponse;

/// Turn malformed JSON bodies into the standard 400 envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Invalid request body: {err}");
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(&message));
    InternalError::from_response(message, response).into()
}

/// Turn malformed query strings into the standard 400 envelope
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Invalid query parameters: {err}");
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(&message));
    InternalError::from_response(message, response).into()
}
