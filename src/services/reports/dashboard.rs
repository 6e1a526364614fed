use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::ReportService;
use crate::models::{
    ApiResponse,
    attendance::entities::AttendanceStatus,
    reports::responses::{BranchActivityStat, DashboardResponse, TodaySummary},
    students::entities::Branch,
};
use crate::services::error_response;

// Dashboard roll-up: today's counts, the active roster size and the
// per-branch activity of the day.
pub async fn dashboard(
    service: &ReportService,
    today: NaiveDate,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let records = match storage.attendance_on(today).await {
        Ok(records) => records,
        Err(e) => return Ok(error_response(&e)),
    };
    let total_students = match storage.count_active_students(None).await {
        Ok(total) => total as i64,
        Err(e) => return Ok(error_response(&e)),
    };

    let mut present = 0i64;
    let mut absent = 0i64;
    let mut per_branch: BTreeMap<String, (i64, i64)> = BTreeMap::new();

    for record in &records {
        let slot = per_branch.entry(record.branch.to_string()).or_default();
        match record.status {
            AttendanceStatus::Present => {
                present += 1;
                slot.0 += 1;
            }
            AttendanceStatus::Absent => {
                absent += 1;
                slot.1 += 1;
            }
        }
    }

    let branch_stats = per_branch
        .into_iter()
        .filter_map(|(branch, (present, absent))| {
            let branch = branch.parse::<Branch>().ok()?;
            Some(BranchActivityStat {
                branch,
                present,
                absent,
                total_records: present + absent,
            })
        })
        .collect();

    let response = DashboardResponse {
        today: TodaySummary {
            present,
            absent,
            total: present + absent,
        },
        total_students,
        branch_stats,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
