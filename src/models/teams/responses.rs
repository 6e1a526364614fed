use serde::Serialize;

use crate::models::attendance::entities::AttendanceStatus;
use crate::models::students::entities::{Branch, Student};

// Per-branch overview row (GET /api/teams/branches)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchOverview {
    pub name: Branch,
    pub total_students: i64,
    pub present_today: i64,
    pub attendance_rate: i64, // whole percent
}

// Roster entry with today's status merged in; null when the cohort has
// not been marked yet today
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithTodayStatus {
    #[serde(flatten)]
    pub student: Student,
    pub today_status: Option<AttendanceStatus>,
}

// GET /api/teams/branch/{branch}
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchMembersResponse {
    pub branch: Branch,
    pub students: Vec<StudentWithTodayStatus>,
}
