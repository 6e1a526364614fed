use chrono::NaiveDate;
use serde::Serialize;

use super::entities::AttendanceStatus;

// Per-status count inside a daily statistics row
#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub status: AttendanceStatus,
    pub count: i64,
}

// One statistics row per distinct date, newest first
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatistics {
    pub date: NaiveDate,
    pub statuses: Vec<StatusCount>,
    pub total_students: i64,
}

// PUT /api/attendance/{year}/{branch}/{date} outcome
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedCountResponse {
    pub updated_count: u64,
}
