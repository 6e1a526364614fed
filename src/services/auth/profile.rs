use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;

// GET /api/auth/me: echoes the authenticated user placed by RequireJWT.
pub async fn handle_profile(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(user))),
        None => Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::<()>::error("Authentication required"))),
    }
}
