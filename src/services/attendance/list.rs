use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{
    ApiResponse, PaginationQuery,
    attendance::requests::AttendanceListParams,
    students::entities::Branch,
};
use crate::services::error_response;

pub async fn list(
    service: &AttendanceService,
    query: AttendanceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref branch) = query.branch {
        if branch.to_uppercase().parse::<Branch>().is_err() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid branch")));
        }
    }
    if let Some(year) = query.year {
        if let Err(msg) = crate::utils::validate::validate_year(year) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
        }
    }

    let (page, limit) = query.pagination.normalized();
    let storage = service.get_storage(request);

    match storage.list_attendance(query).await {
        Ok((records, total)) => {
            let count = records.len() as i64;
            let total_pages = PaginationQuery::total_pages(total, limit);
            Ok(HttpResponse::Ok().json(ApiResponse::paginated(
                records,
                count,
                total as i64,
                total_pages,
                page as i64,
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
