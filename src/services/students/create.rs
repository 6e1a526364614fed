use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;

use super::{StudentService, validate_student_fields};
use crate::models::{ApiResponse, students::requests::CreateStudentRequest};
use crate::services::error_response;

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current_year = chrono::Local::now().year();
    if let Err(msg) = validate_student_fields(&student_data, current_year) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            student,
            "Student registered successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
