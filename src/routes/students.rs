use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use std::str::FromStr;

use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::students::entities::Branch;
use crate::models::students::requests::{
    BranchFilterQuery, CreateStudentRequest, StudentBulkUpdateData, StudentListParams,
    UpdateStudentRequest, YearFilterQuery,
};
use crate::services::StudentService;
use crate::utils::{SafeBranch, SafeUid, SafeYear};

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// Query-string branches arrive lowercase from some clients
fn parse_branch_query(raw: Option<&str>) -> Result<Option<Branch>, HttpResponse> {
    match raw {
        Some(raw) => Branch::from_str(&raw.to_uppercase())
            .map(Some)
            .map_err(|_| HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid branch"))),
        None => Ok(None),
    }
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn statistics(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.statistics(&req).await
}

pub async fn branches(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.branches(&req).await
}

pub async fn students_by_branch(
    req: HttpRequest,
    branch: SafeBranch,
    query: web::Query<YearFilterQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .students_by_branch(branch.0, query.year, &req)
        .await
}

pub async fn students_by_year(
    req: HttpRequest,
    year: SafeYear,
    query: web::Query<BranchFilterQuery>,
) -> ActixResult<HttpResponse> {
    let branch = match parse_branch_query(query.branch.as_deref()) {
        Ok(branch) => branch,
        Err(resp) => return Ok(resp),
    };
    STUDENT_SERVICE.students_by_year(year.0, branch, &req).await
}

pub async fn cohort(
    req: HttpRequest,
    year: SafeYear,
    branch: SafeBranch,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.cohort(year.0, branch.0, &req).await
}

pub async fn get_student(req: HttpRequest, uid: SafeUid) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(uid.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    uid: SafeUid,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(uid.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, uid: SafeUid) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(uid.0, &req).await
}

pub async fn bulk_update_branch(
    req: HttpRequest,
    branch: SafeBranch,
    query: web::Query<YearFilterQuery>,
    update_data: web::Json<StudentBulkUpdateData>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .bulk_update(Some(branch.0), query.year, update_data.into_inner(), &req)
        .await
}

pub async fn bulk_delete_branch(
    req: HttpRequest,
    branch: SafeBranch,
    query: web::Query<YearFilterQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .bulk_delete(Some(branch.0), query.year, &req)
        .await
}

pub async fn bulk_update_year(
    req: HttpRequest,
    year: SafeYear,
    query: web::Query<BranchFilterQuery>,
    update_data: web::Json<StudentBulkUpdateData>,
) -> ActixResult<HttpResponse> {
    let branch = match parse_branch_query(query.branch.as_deref()) {
        Ok(branch) => branch,
        Err(resp) => return Ok(resp),
    };
    STUDENT_SERVICE
        .bulk_update(branch, Some(year.0), update_data.into_inner(), &req)
        .await
}

pub async fn bulk_delete_year(
    req: HttpRequest,
    year: SafeYear,
    query: web::Query<BranchFilterQuery>,
) -> ActixResult<HttpResponse> {
    let branch = match parse_branch_query(query.branch.as_deref()) {
        Ok(branch) => branch,
        Err(resp) => return Ok(resp),
    };
    STUDENT_SERVICE.bulk_delete(branch, Some(year.0), &req).await
}

// Literal segments are registered before the catch-all /{uid} routes.
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_student))
            .route("", web::get().to(list_students))
            .route("/statistics", web::get().to(statistics))
            .route("/branches", web::get().to(branches))
            .route("/branch/{branch}", web::get().to(students_by_branch))
            .route("/branch/{branch}", web::put().to(bulk_update_branch))
            .route("/branch/{branch}", web::delete().to(bulk_delete_branch))
            .route("/year/{year}", web::get().to(students_by_year))
            .route("/year/{year}", web::put().to(bulk_update_year))
            .route("/year/{year}", web::delete().to(bulk_delete_year))
            .route("/attendance/{year}/{branch}", web::get().to(cohort))
            .route("/search/{uid}", web::get().to(get_student))
            .route("/{uid}", web::put().to(update_student))
            .route("/{uid}", web::delete().to(delete_student)),
    );
}
