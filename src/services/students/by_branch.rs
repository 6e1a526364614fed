use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, students::entities::Branch};
use crate::services::error_response;

pub async fn students_by_branch(
    service: &StudentService,
    branch: Branch,
    year: Option<i32>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(year) = year {
        if let Err(msg) = crate::utils::validate::validate_year(year) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
        }
    }

    let storage = service.get_storage(request);

    match storage.list_students_by_branch(branch, year).await {
        Ok(students) => {
            let count = students.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::list(students, count)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
