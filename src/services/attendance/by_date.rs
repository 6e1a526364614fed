use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;

use super::AttendanceService;
use crate::models::{ApiResponse, students::entities::Branch};
use crate::services::error_response;

pub async fn by_date(
    service: &AttendanceService,
    year: i32,
    branch: Branch,
    date: NaiveDate,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_attendance_by_date(year, branch, date).await {
        Ok(records) => {
            let count = records.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::list(records, count)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
