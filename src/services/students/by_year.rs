use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, students::entities::Branch};
use crate::services::error_response;

pub async fn students_by_year(
    service: &StudentService,
    year: i32,
    branch: Option<Branch>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_by_year(year, branch).await {
        Ok(students) => {
            let count = students.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::list(students, count)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
