use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, PaginationQuery,
    students::{entities::Branch, requests::StudentListParams},
};
use crate::services::error_response;

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let branch = match query.branch.as_deref() {
        Some(raw) => match raw.to_uppercase().parse::<Branch>() {
            Ok(branch) => Some(branch),
            Err(_) => {
                return Ok(
                    HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid branch"))
                );
            }
        },
        None => None,
    };

    if let Some(year) = query.year {
        if let Err(msg) = crate::utils::validate::validate_year(year) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
        }
    }

    let (page, limit) = query.pagination.normalized();
    let storage = service.get_storage(request);

    match storage
        .list_students(branch, query.year, query.search, page, limit)
        .await
    {
        Ok((students, total)) => {
            let count = students.len() as i64;
            let total_pages = PaginationQuery::total_pages(total, limit);
            Ok(HttpResponse::Ok().json(ApiResponse::paginated(
                students,
                count,
                total as i64,
                total_pages,
                page as i64,
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
