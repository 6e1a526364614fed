use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{
    ApiResponse, attendance::requests::DateRangeQuery, students::entities::Branch,
};
use crate::services::error_response;

pub async fn statistics(
    service: &AttendanceService,
    year: i32,
    branch: Branch,
    range: DateRangeQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // both bounds or neither
    if range.start_date.is_some() != range.end_date.is_some() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "startDate and endDate must be provided together",
        )));
    }

    let storage = service.get_storage(request);

    match storage
        .attendance_statistics(year, branch, range.as_range())
        .await
    {
        Ok(stats) => {
            let count = stats.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::list(stats, count)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
