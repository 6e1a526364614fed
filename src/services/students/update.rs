use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;

use super::{StudentService, validate_student_fields};
use crate::models::{ApiResponse, students::requests::UpdateStudentRequest};
use crate::services::error_response;

pub async fn update_student(
    service: &StudentService,
    uid: String,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current_year = chrono::Local::now().year();
    if let Err(msg) = validate_student_fields(&update_data, current_year) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_student(&uid, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            student,
            "Student updated successfully",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Student not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
