use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, attendance::requests::DateRangeQuery};
use crate::services::error_response;

pub async fn history(
    service: &AttendanceService,
    student_id: i64,
    range: DateRangeQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if range.start_date.is_some() != range.end_date.is_some() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "startDate and endDate must be provided together",
        )));
    }

    let storage = service.get_storage(request);

    match storage.student_history(student_id, range.as_range()).await {
        Ok(records) => {
            let count = records.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::list(records, count)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
