use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::collections::HashMap;

use super::TeamService;
use crate::models::{
    ApiResponse,
    attendance::entities::AttendanceStatus,
    students::entities::Branch,
    teams::responses::{BranchMembersResponse, StudentWithTodayStatus},
};
use crate::services::error_response;

// Branch roster with today's status merged onto each student.
pub async fn branch_detail(
    service: &TeamService,
    branch: Branch,
    today: NaiveDate,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match storage.list_students_by_branch(branch, None).await {
        Ok(students) => students,
        Err(e) => return Ok(error_response(&e)),
    };
    let today_records = match storage.attendance_on(today).await {
        Ok(records) => records,
        Err(e) => return Ok(error_response(&e)),
    };

    let status_by_student: HashMap<i64, AttendanceStatus> = today_records
        .into_iter()
        .filter(|r| r.branch == branch)
        .map(|r| (r.student_id, r.status))
        .collect();

    let students = students
        .into_iter()
        .map(|student| {
            let today_status = status_by_student.get(&student.id).copied();
            StudentWithTodayStatus {
                student,
                today_status,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(BranchMembersResponse {
        branch,
        students,
    })))
}
