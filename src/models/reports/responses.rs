use chrono::NaiveDate;
use serde::Serialize;

use crate::models::attendance::entities::AttendanceRecord;
use crate::models::students::entities::Branch;

// Today's roll-up on the dashboard
#[derive(Debug, Serialize)]
pub struct TodaySummary {
    pub present: i64,
    pub absent: i64,
    pub total: i64,
}

// Per-branch marking activity inside the dashboard window
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchActivityStat {
    pub branch: Branch,
    pub present: i64,
    pub absent: i64,
    pub total_records: i64,
}

// GET /api/reports/dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub today: TodaySummary,
    pub total_students: i64,
    pub branch_stats: Vec<BranchActivityStat>,
}

// Aggregate block of a range report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_records: i64,
    pub present: i64,
    pub absent: i64,
}

#[derive(Debug, Serialize)]
pub struct ReportDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

// GET /api/reports/attendance
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportResponse {
    pub attendance: Vec<AttendanceRecord>,
    pub summary: ReportSummary,
    pub date_range: ReportDateRange,
}
