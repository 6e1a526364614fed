use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    attendance::{requests::UpdateAttendanceRequest, responses::UpdatedCountResponse},
    students::entities::Branch,
};
use crate::services::error_response;

pub async fn update(
    service: &AttendanceService,
    year: i32,
    branch: Branch,
    date: NaiveDate,
    update_request: UpdateAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if update_request.attendance_data.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Attendance data must not be empty")));
    }

    let Some(updated_by) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::<()>::error("Authentication required")));
    };

    let storage = service.get_storage(request);

    match storage
        .update_attendance(year, branch, date, update_request.attendance_data, updated_by)
        .await
    {
        Ok(updated_count) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            UpdatedCountResponse { updated_count },
            "Attendance updated successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
