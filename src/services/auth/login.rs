use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::{
    ApiResponse,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    match storage
        .get_user_by_username_or_email(&login_request.username)
        .await
    {
        Ok(Some(user)) => {
            if verify_password(&login_request.password, &user.password_hash) {
                let _ = storage.update_last_login(user.id).await;

                match user.generate_token_pair() {
                    Ok(token_pair) => {
                        tracing::info!("User {} logged in successfully", user.username);

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            refresh_token: token_pair.refresh_token,
                            expires_in: config.jwt.access_token_expiry * 60,
                            user,
                        };

                        Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
                            response,
                            "Login successful",
                        )))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                            "Login failed, unable to generate token",
                        )))
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized()
                    .json(ApiResponse::<()>::error("Username or password is incorrect")))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::<()>::error("Username or password is incorrect"))),
        Err(e) => {
            tracing::error!("Login storage error: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error")))
        }
    }
}
