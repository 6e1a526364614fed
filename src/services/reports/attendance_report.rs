use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::{
    ApiResponse,
    attendance::entities::AttendanceStatus,
    reports::{
        requests::AttendanceReportQuery,
        responses::{AttendanceReportResponse, ReportDateRange, ReportSummary},
    },
    students::entities::Branch,
};
use crate::services::error_response;

pub async fn attendance_report(
    service: &ReportService,
    query: AttendanceReportQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if query.start_date > query.end_date {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("startDate must not be after endDate")));
    }

    let branch = match query.branch.as_deref() {
        Some(raw) => match raw.to_uppercase().parse::<Branch>() {
            Ok(branch) => Some(branch),
            Err(_) => {
                return Ok(
                    HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid branch"))
                );
            }
        },
        None => None,
    };

    if let Some(year) = query.year {
        if let Err(msg) = crate::utils::validate::validate_year(year) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)));
        }
    }

    let storage = service.get_storage(request);

    match storage
        .attendance_between(query.start_date, query.end_date, query.year, branch)
        .await
    {
        Ok(attendance) => {
            let present = attendance
                .iter()
                .filter(|r| r.status == AttendanceStatus::Present)
                .count() as i64;
            let total_records = attendance.len() as i64;

            let response = AttendanceReportResponse {
                summary: ReportSummary {
                    total_records,
                    present,
                    absent: total_records - present,
                },
                date_range: ReportDateRange {
                    start: query.start_date,
                    end: query.end_date,
                },
                attendance,
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
