use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_student(
    service: &StudentService,
    uid: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_uid(&uid).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Student not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
