use super::entities::Branch;
use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// Student creation request. The uid is always derived server-side,
// never accepted from the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub student_name: String,
    pub branch: Branch,
    pub roll_no: i32,
    pub student_phone: String,
    pub parent_phone: String,
    pub year: i32,
    pub admission_year: i32,
}

// Updates carry the full field set, mirroring the creation contract;
// the uid is re-derived from the new fields.
pub type UpdateStudentRequest = CreateStudentRequest;

// Listing query (GET /api/students); search matches name or uid
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub search: Option<String>,
}

// Optional year filter for branch-scoped routes
#[derive(Debug, Deserialize)]
pub struct YearFilterQuery {
    pub year: Option<i32>,
}

// Optional branch filter for year-scoped routes
#[derive(Debug, Deserialize)]
pub struct BranchFilterQuery {
    pub branch: Option<String>,
}

// Fields a bulk update may touch. Fields feeding the uid derivation
// (year, branch, rollNo, admissionYear) are deliberately excluded;
// those change only through the single-student update path, which
// re-derives and re-checks the uid.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentBulkUpdateData {
    pub student_name: Option<String>,
    pub student_phone: Option<String>,
    pub parent_phone: Option<String>,
}
