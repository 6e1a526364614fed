use chrono::NaiveDate;
use serde::Deserialize;

use super::entities::AttendanceStatus;
use crate::models::common::pagination::PaginationQuery;
use crate::models::students::entities::Branch;

// One (student, status) pair inside a bulk mark/update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

// POST /api/attendance/mark. The date deserializes straight to a
// NaiveDate, so day granularity is enforced by the type.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub year: i32,
    pub branch: Branch,
    pub date: NaiveDate,
    pub attendance_data: Vec<AttendanceEntry>,
}

// PUT /api/attendance/{year}/{branch}/{date}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRequest {
    pub attendance_data: Vec<AttendanceEntry>,
}

// Inclusive date-range filter; both bounds or neither
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRangeQuery {
    pub fn as_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

// GET /api/attendance listing filters
#[derive(Debug, Deserialize)]
pub struct AttendanceListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub year: Option<i32>,
    pub branch: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}
