use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::{
    ApiResponse,
    auth::{requests::RefreshRequest, responses::RefreshResponse},
};
use crate::utils::jwt::JwtUtils;

// POST /api/auth/refresh: exchanges a valid refresh token for a fresh
// access token. No storage round trip; the token is the credential.
pub async fn handle_refresh(
    refresh_request: RefreshRequest,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    match JwtUtils::refresh_access_token(&refresh_request.refresh_token) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(RefreshResponse {
            access_token,
            expires_in: config.jwt.access_token_expiry * 60,
        }))),
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);
            Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::<()>::error("Invalid or expired refresh token")))
        }
    }
}
