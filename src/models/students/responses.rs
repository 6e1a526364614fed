use super::entities::Branch;
use serde::Serialize;

// Branch-wise roster count
#[derive(Debug, Serialize)]
pub struct BranchStat {
    pub branch: Branch,
    pub count: i64,
}

// Year-wise roster count
#[derive(Debug, Serialize)]
pub struct YearStat {
    pub year: i32,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: i64,
}

// Branch rollup with its per-year breakdown
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchYearStat {
    pub branch: Branch,
    pub years: Vec<YearCount>,
    pub total_count: i64,
}

// GET /api/students/statistics
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatisticsResponse {
    pub total_students: i64,
    pub branch_stats: Vec<BranchStat>,
    pub year_stats: Vec<YearStat>,
    pub branch_year_stats: Vec<BranchYearStat>,
}

// Bulk operation outcomes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedCountResponse {
    pub modified_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCountResponse {
    pub deleted_count: u64,
}
