use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::requests::AttendanceReportQuery;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;

static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    let today = chrono::Local::now().date_naive();
    REPORT_SERVICE.dashboard(today, &req).await
}

pub async fn attendance_report(
    req: HttpRequest,
    query: web::Query<AttendanceReportQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .attendance_report(query.into_inner(), &req)
        .await
}

pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::manager_roles()))
                    .route("/dashboard", web::get().to(dashboard))
                    .route("/attendance", web::get().to(attendance_report)),
            ),
    );
}
