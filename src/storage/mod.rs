use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceEntry, AttendanceListParams},
        responses::DailyStatistics,
    },
    students::{
        entities::{Branch, Student},
        requests::{CreateStudentRequest, StudentBulkUpdateData, UpdateStudentRequest},
        responses::StudentStatisticsResponse,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// User management
    // Create a user
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // Fetch a user by ID
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // Fetch a user by username or email
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // Record the last login time
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // Count users (startup admin seeding)
    async fn count_users(&self) -> Result<u64>;

    /// Student roster management
    // Register a student; runs both duplicate checks and derives the uid
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // Fetch a student by uid, active or not
    async fn get_student_by_uid(&self, uid: &str) -> Result<Option<Student>>;
    // Paginated listing of active students with optional branch/year
    // filters and a name/uid search
    async fn list_students(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
        search: Option<String>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Student>, u64)>;
    // Active students of a branch, optionally narrowed to a year
    async fn list_students_by_branch(
        &self,
        branch: Branch,
        year: Option<i32>,
    ) -> Result<Vec<Student>>;
    // Active students of a year, optionally narrowed to a branch
    async fn list_students_by_year(
        &self,
        year: i32,
        branch: Option<Branch>,
    ) -> Result<Vec<Student>>;
    // The (year, branch) cohort ordered by roll number, for marking
    async fn list_cohort(&self, year: i32, branch: Branch) -> Result<Vec<Student>>;
    // Full-field update addressed by uid; re-derives and re-checks the uid
    async fn update_student(&self, uid: &str, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // Soft delete
    async fn deactivate_student(&self, uid: &str) -> Result<bool>;
    // Bulk field update over active students matching the filters
    async fn bulk_update_students(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
        update: StudentBulkUpdateData,
    ) -> Result<u64>;
    // Bulk soft delete over active students matching the filters
    async fn bulk_deactivate_students(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
    ) -> Result<u64>;
    // Roster aggregation: branch-wise, year-wise, branch x year
    async fn student_statistics(&self) -> Result<StudentStatisticsResponse>;
    // Distinct branches present in the roster
    async fn list_branches(&self) -> Result<Vec<Branch>>;
    // Active student count, optionally per branch
    async fn count_active_students(&self, branch: Option<Branch>) -> Result<u64>;

    /// Attendance ledger
    // All-or-nothing cohort marking; the (student, date) unique index is
    // the authoritative duplicate signal
    async fn mark_attendance(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
        entries: Vec<AttendanceEntry>,
        marked_by: i64,
    ) -> Result<Vec<AttendanceRecord>>;
    // Per-student status updates within an already marked cohort
    async fn update_attendance(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
        entries: Vec<AttendanceEntry>,
        updated_by: i64,
    ) -> Result<u64>;
    // The cohort's records for one day, student summaries populated
    async fn get_attendance_by_date(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>>;
    // One row per distinct date, newest first
    async fn attendance_statistics(
        &self,
        year: i32,
        branch: Branch,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<DailyStatistics>>;
    // A student's records, newest first
    async fn student_history(
        &self,
        student_id: i64,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<AttendanceRecord>>;
    // All records of one calendar day, ordered by (branch, year, roll_no)
    async fn attendance_on(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>>;
    // All records inside an inclusive range, newest first
    async fn attendance_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        year: Option<i32>,
        branch: Option<Branch>,
    ) -> Result<Vec<AttendanceRecord>>;
    // Paginated listing with optional filters, newest first
    async fn list_attendance(&self, query: AttendanceListParams)
    -> Result<(Vec<AttendanceRecord>, u64)>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
