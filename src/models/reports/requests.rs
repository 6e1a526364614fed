use chrono::NaiveDate;
use serde::Deserialize;

// GET /api/reports/attendance query. The date range is required here,
// unlike the optional filters elsewhere.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub year: Option<i32>,
    pub branch: Option<String>,
}
