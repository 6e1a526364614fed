use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ApiResponse;
use crate::services::error_response;

// Soft delete; the attendance history of the student is retained.
pub async fn delete_student(
    service: &StudentService,
    uid: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.deactivate_student(&uid).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Student removed successfully")))
        }
        Ok(false) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Student not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
