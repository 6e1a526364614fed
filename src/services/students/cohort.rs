use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, students::entities::Branch};
use crate::services::error_response;

// The (year, branch) cohort ordered by roll number, as consumed by the
// attendance marking screen.
pub async fn cohort(
    service: &StudentService,
    year: i32,
    branch: Branch,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_cohort(year, branch).await {
        Ok(students) => {
            let count = students.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::list(students, count)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
