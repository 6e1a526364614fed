use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ApiResponse;
use crate::services::error_response;

// Distinct branches that currently have active students.
pub async fn branches(service: &StudentService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_branches().await {
        Ok(branches) => {
            let count = branches.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::list(branches, count)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
