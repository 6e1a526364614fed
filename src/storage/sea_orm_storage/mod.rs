//! SeaORM storage implementation
//!
//! Single database storage layer supporting SQLite, PostgreSQL and MySQL.

mod attendance;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{AttendanceSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection with WAL and pragma tuning.
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                AttendanceSystemError::database_config(format!("invalid SQLite URL: {e}"))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_connection(format!("SQLite connect failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Generic connection for PostgreSQL, MySQL etc.
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            AttendanceSystemError::database_connection(format!("cannot connect to database: {e}"))
        })
    }

    /// Infer the database type from the URL and normalize it.
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AttendanceSystemError::database_config(format!(
                "cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or .db/.sqlite file paths"
            )))
        }
    }
}

use super::Storage;
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
use chrono::NaiveDate;

#[async_trait::async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_uid(&self, uid: &str) -> Result<Option<Student>> {
        self.get_student_by_uid_impl(uid).await
    }

    async fn list_students(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
        search: Option<String>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Student>, u64)> {
        self.list_students_impl(branch, year, search, page, limit)
            .await
    }

    async fn list_students_by_branch(
        &self,
        branch: Branch,
        year: Option<i32>,
    ) -> Result<Vec<Student>> {
        self.list_students_by_branch_impl(branch, year).await
    }

    async fn list_students_by_year(
        &self,
        year: i32,
        branch: Option<Branch>,
    ) -> Result<Vec<Student>> {
        self.list_students_by_year_impl(year, branch).await
    }

    async fn list_cohort(&self, year: i32, branch: Branch) -> Result<Vec<Student>> {
        self.list_cohort_impl(year, branch).await
    }

    async fn update_student(
        &self,
        uid: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(uid, update).await
    }

    async fn deactivate_student(&self, uid: &str) -> Result<bool> {
        self.deactivate_student_impl(uid).await
    }

    async fn bulk_update_students(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
        update: StudentBulkUpdateData,
    ) -> Result<u64> {
        self.bulk_update_students_impl(branch, year, update).await
    }

    async fn bulk_deactivate_students(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
    ) -> Result<u64> {
        self.bulk_deactivate_students_impl(branch, year).await
    }

    async fn student_statistics(&self) -> Result<StudentStatisticsResponse> {
        self.student_statistics_impl().await
    }

    async fn list_branches(&self) -> Result<Vec<Branch>> {
        self.list_branches_impl().await
    }

    async fn count_active_students(&self, branch: Option<Branch>) -> Result<u64> {
        self.count_active_students_impl(branch).await
    }

    async fn mark_attendance(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
        entries: Vec<AttendanceEntry>,
        marked_by: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        self.mark_attendance_impl(year, branch, date, entries, marked_by)
            .await
    }

    async fn update_attendance(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
        entries: Vec<AttendanceEntry>,
        updated_by: i64,
    ) -> Result<u64> {
        self.update_attendance_impl(year, branch, date, entries, updated_by)
            .await
    }

    async fn get_attendance_by_date(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>> {
        self.get_attendance_by_date_impl(year, branch, date).await
    }

    async fn attendance_statistics(
        &self,
        year: i32,
        branch: Branch,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<DailyStatistics>> {
        self.attendance_statistics_impl(year, branch, range).await
    }

    async fn student_history(
        &self,
        student_id: i64,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<AttendanceRecord>> {
        self.student_history_impl(student_id, range).await
    }

    async fn attendance_on(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        self.attendance_on_impl(date).await
    }

    async fn attendance_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        year: Option<i32>,
        branch: Option<Branch>,
    ) -> Result<Vec<AttendanceRecord>> {
        self.attendance_between_impl(start, end, year, branch).await
    }

    async fn list_attendance(
        &self,
        query: AttendanceListParams,
    ) -> Result<(Vec<AttendanceRecord>, u64)> {
        self.list_attendance_impl(query).await
    }
}
