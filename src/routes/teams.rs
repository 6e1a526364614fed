use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::TeamService;
use crate::utils::SafeBranch;

static TEAM_SERVICE: Lazy<TeamService> = Lazy::new(TeamService::new_lazy);

pub async fn branches(req: HttpRequest) -> ActixResult<HttpResponse> {
    let today = chrono::Local::now().date_naive();
    TEAM_SERVICE.branches(today, &req).await
}

pub async fn branch_detail(req: HttpRequest, branch: SafeBranch) -> ActixResult<HttpResponse> {
    let today = chrono::Local::now().date_naive();
    TEAM_SERVICE.branch_detail(branch.0, today, &req).await
}

pub fn configure_team_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teams")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::manager_roles()))
                    .route("/branches", web::get().to(branches))
                    .route("/branch/{branch}", web::get().to(branch_detail)),
            ),
    );
}
