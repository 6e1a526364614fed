use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::TeamService;
use crate::models::{
    ApiResponse, attendance::entities::AttendanceStatus, teams::responses::BranchOverview,
};
use crate::services::error_response;

// Whole-percent attendance rate, rounded to nearest
fn attendance_rate(present: i64, total: i64) -> i64 {
    if total > 0 {
        (present * 100 + total / 2) / total
    } else {
        0
    }
}

// Per-branch overview: roster size, today's present count and the
// attendance rate as a whole percent.
pub async fn branches(
    service: &TeamService,
    today: NaiveDate,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let branch_list = match storage.list_branches().await {
        Ok(list) => list,
        Err(e) => return Ok(error_response(&e)),
    };
    let today_records = match storage.attendance_on(today).await {
        Ok(records) => records,
        Err(e) => return Ok(error_response(&e)),
    };

    let mut present_by_branch: BTreeMap<String, i64> = BTreeMap::new();
    for record in &today_records {
        if record.status == AttendanceStatus::Present {
            *present_by_branch.entry(record.branch.to_string()).or_default() += 1;
        }
    }

    let mut overviews = Vec::with_capacity(branch_list.len());
    for branch in branch_list {
        let total_students = match storage.count_active_students(Some(branch)).await {
            Ok(total) => total as i64,
            Err(e) => return Ok(error_response(&e)),
        };
        let present_today = present_by_branch
            .get(branch.as_str())
            .copied()
            .unwrap_or(0);
        overviews.push(BranchOverview {
            name: branch,
            total_students,
            present_today,
            attendance_rate: attendance_rate(present_today, total_students),
        });
    }

    let count = overviews.len() as i64;
    Ok(HttpResponse::Ok().json(ApiResponse::list(overviews, count)))
}

#[cfg(test)]
mod tests {
    use super::attendance_rate;

    #[test]
    fn test_attendance_rate_rounds_to_nearest() {
        assert_eq!(attendance_rate(2, 3), 67);
        assert_eq!(attendance_rate(1, 3), 33);
        assert_eq!(attendance_rate(1, 2), 50);
        assert_eq!(attendance_rate(3, 4), 75);
        assert_eq!(attendance_rate(0, 5), 0);
        assert_eq!(attendance_rate(5, 5), 100);
    }

    #[test]
    fn test_attendance_rate_empty_roster() {
        assert_eq!(attendance_rate(0, 0), 0);
    }
}
