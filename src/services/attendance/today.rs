use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;

use super::AttendanceService;
use crate::models::ApiResponse;
use crate::services::error_response;

// The calendar day is computed once at the route edge and injected, so
// everything below works on an explicit date.
pub async fn today(
    service: &AttendanceService,
    today: NaiveDate,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.attendance_on(today).await {
        Ok(records) => {
            let count = records.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::list(records, count)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
