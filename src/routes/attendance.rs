use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceListParams, DateRangeQuery, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::services::AttendanceService;
use crate::utils::{SafeBranch, SafeDate, SafeIDI64, SafeYear};

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn mark(
    req: HttpRequest,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.mark(mark_data.into_inner(), &req).await
}

pub async fn list(
    req: HttpRequest,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list(query.into_inner(), &req).await
}

// "today" is resolved to a local calendar day here, at the edge
pub async fn today(req: HttpRequest) -> ActixResult<HttpResponse> {
    let today = chrono::Local::now().date_naive();
    ATTENDANCE_SERVICE.today(today, &req).await
}

pub async fn statistics(
    req: HttpRequest,
    year: SafeYear,
    branch: SafeBranch,
    range: web::Query<DateRangeQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .statistics(year.0, branch.0, range.into_inner(), &req)
        .await
}

pub async fn student_history(
    req: HttpRequest,
    student_id: SafeIDI64,
    range: web::Query<DateRangeQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .history(student_id.0, range.into_inner(), &req)
        .await
}

pub async fn by_date(
    req: HttpRequest,
    year: SafeYear,
    branch: SafeBranch,
    date: SafeDate,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.by_date(year.0, branch.0, date.0, &req).await
}

pub async fn update(
    req: HttpRequest,
    year: SafeYear,
    branch: SafeBranch,
    date: SafeDate,
    update_data: web::Json<UpdateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update(year.0, branch.0, date.0, update_data.into_inner(), &req)
        .await
}

pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/attendance")
            .wrap(middlewares::RequireJWT)
            .route("/mark", web::post().to(mark))
            .route("/today", web::get().to(today))
            .route("/statistics/{year}/{branch}", web::get().to(statistics))
            .route("/student/{id}", web::get().to(student_history))
            .route("", web::get().to(list))
            .route("/{year}/{branch}/{date}", web::get().to(by_date))
            .route("/{year}/{branch}/{date}", web::put().to(update)),
    );
}
