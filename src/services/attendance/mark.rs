use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, attendance::requests::MarkAttendanceRequest};
use crate::services::error_response;

pub async fn mark(
    service: &AttendanceService,
    mark_request: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = crate::utils::validate::validate_year(mark_request.year) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
    }
    if mark_request.attendance_data.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Attendance data must not be empty")));
    }

    let Some(marked_by) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::<()>::error("Authentication required")));
    };

    let storage = service.get_storage(request);

    match storage
        .mark_attendance(
            mark_request.year,
            mark_request.branch,
            mark_request.date,
            mark_request.attendance_data,
            marked_by,
        )
        .await
    {
        Ok(records) => {
            let count = records.len() as i64;
            Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
                records,
                format!("Attendance marked for {count} students"),
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
