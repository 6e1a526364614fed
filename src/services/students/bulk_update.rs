use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse,
    students::{
        entities::Branch,
        requests::StudentBulkUpdateData,
        responses::ModifiedCountResponse,
    },
};
use crate::services::error_response;

pub async fn bulk_update(
    service: &StudentService,
    branch: Option<Branch>,
    year: Option<i32>,
    update_data: StudentBulkUpdateData,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(year) = year {
        if let Err(msg) = crate::utils::validate::validate_year(year) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
        }
    }
    if let Some(ref name) = update_data.student_name {
        if let Err(msg) = crate::utils::validate::validate_student_name(name) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
        }
    }
    for phone in [&update_data.student_phone, &update_data.parent_phone]
        .into_iter()
        .flatten()
    {
        if let Err(msg) = crate::utils::validate::validate_phone(phone) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
        }
    }

    let storage = service.get_storage(request);

    match storage.bulk_update_students(branch, year, update_data).await {
        Ok(modified_count) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            ModifiedCountResponse { modified_count },
            "Students updated successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
