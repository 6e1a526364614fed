use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse,
    students::{entities::Branch, responses::DeletedCountResponse},
};
use crate::services::error_response;

// Bulk soft delete of every active student matching the filters.
pub async fn bulk_delete(
    service: &StudentService,
    branch: Option<Branch>,
    year: Option<i32>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(year) = year {
        if let Err(msg) = crate::utils::validate::validate_year(year) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
        }
    }

    let storage = service.get_storage(request);

    match storage.bulk_deactivate_students(branch, year).await {
        Ok(deleted_count) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            DeletedCountResponse { deleted_count },
            "Students removed successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
