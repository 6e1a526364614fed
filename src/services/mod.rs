pub mod attendance;
pub mod auth;
pub mod reports;
pub mod students;
pub mod teams;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use reports::ReportService;
pub use students::StudentService;
pub use teams::TeamService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::AttendanceSystemError;
use crate::models::ApiResponse;

/// Maps an error kind to the HTTP status contract: validation, duplicate
/// and precondition failures are 400, missing entities 404, everything
/// unexpected is logged and returned as a generic 500.
pub(crate) fn error_response(err: &AttendanceSystemError) -> HttpResponse {
    use AttendanceSystemError::*;
    match err {
        Validation(msg) | DuplicateUid(msg) | DuplicateRollNumber(msg) | AlreadyMarked(msg)
        | DateParse(msg) => HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)),
        NotFound(msg) => HttpResponse::NotFound().json(ApiResponse::<()>::error(msg)),
        Authentication(msg) => HttpResponse::Unauthorized().json(ApiResponse::<()>::error(msg)),
        Authorization(msg) => HttpResponse::Forbidden().json(ApiResponse::<()>::error(msg)),
        _ => {
            error!("Internal error: {}", err.format_simple());
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error"))
        }
    }
}
