use super::SeaOrmStorage;
use crate::entity::attendance_records::Column;
use crate::entity::prelude::{AttendanceActiveModel, AttendanceRecords};
use crate::entity::students;
use crate::errors::{AttendanceSystemError, Result};
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceEntry, AttendanceListParams},
    responses::{DailyStatistics, StatusCount},
};
use crate::models::students::entities::Branch;
use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use std::collections::BTreeMap;

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let msg = err.to_string();
    msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value")
        || msg.contains("Duplicate entry")
}

impl SeaOrmStorage {
    /// Marks a whole cohort for one day, all-or-nothing.
    ///
    /// The pre-check inside the transaction is advisory; the unique index
    /// on (student_id, date) is what actually closes the race between two
    /// concurrent marks, so a violation at insert time maps to the same
    /// already-marked error.
    ///
    /// Entries whose studentId does not resolve to an active student of
    /// this cohort are skipped without error.
    pub async fn mark_attendance_impl(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
        entries: Vec<AttendanceEntry>,
        marked_by: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let txn = self.db.begin().await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to open transaction: {e}"))
        })?;

        let already = AttendanceRecords::find()
            .filter(Column::Year.eq(year))
            .filter(Column::Branch.eq(branch.as_str()))
            .filter(Column::Date.eq(date))
            .count(&txn)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to check existing attendance: {e}"
                ))
            })?;
        if already > 0 {
            return Err(AttendanceSystemError::already_marked(format!(
                "attendance for year {year} {branch} on {date} is already marked"
            )));
        }

        let cohort: Vec<i64> = students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::IsActive.eq(true))
            .filter(students::Column::Year.eq(year))
            .filter(students::Column::Branch.eq(branch.as_str()))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to load cohort: {e}"))
            })?;

        // last entry wins when a studentId appears twice in the payload
        let mut resolved: BTreeMap<i64, AttendanceEntry> = BTreeMap::new();
        for entry in entries {
            if cohort.contains(&entry.student_id) {
                resolved.insert(entry.student_id, entry);
            }
        }
        if resolved.is_empty() {
            return Err(AttendanceSystemError::validation(
                "no valid students found in attendance data",
            ));
        }

        let now = chrono::Utc::now().timestamp();
        let rows: Vec<AttendanceActiveModel> = resolved
            .into_values()
            .map(|entry| AttendanceActiveModel {
                student_id: Set(entry.student_id),
                year: Set(year),
                branch: Set(branch.as_str().to_string()),
                date: Set(date),
                status: Set(entry.status.to_string()),
                marked_by: Set(marked_by),
                updated_by: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        AttendanceRecords::insert_many(rows)
            .exec(&txn)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AttendanceSystemError::already_marked(format!(
                        "attendance for year {year} {branch} on {date} is already marked"
                    ))
                } else {
                    AttendanceSystemError::database_operation(format!(
                        "failed to insert attendance: {e}"
                    ))
                }
            })?;

        txn.commit().await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to commit attendance: {e}"))
        })?;

        self.get_attendance_by_date_impl(year, branch, date).await
    }

    /// Updates statuses inside an already marked day. Never creates rows;
    /// entries without a matching record are skipped.
    pub async fn update_attendance_impl(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
        entries: Vec<AttendanceEntry>,
        updated_by: i64,
    ) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        let mut updated = 0u64;

        for entry in entries {
            let result = AttendanceRecords::update_many()
                .col_expr(Column::Status, Expr::value(entry.status.to_string()))
                .col_expr(Column::UpdatedBy, Expr::value(updated_by))
                .col_expr(Column::UpdatedAt, Expr::value(now))
                .filter(Column::StudentId.eq(entry.student_id))
                .filter(Column::Year.eq(year))
                .filter(Column::Branch.eq(branch.as_str()))
                .filter(Column::Date.eq(date))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    AttendanceSystemError::database_operation(format!(
                        "failed to update attendance: {e}"
                    ))
                })?;
            updated += result.rows_affected;
        }

        Ok(updated)
    }

    pub async fn get_attendance_by_date_impl(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>> {
        let rows = AttendanceRecords::find()
            .find_also_related(students::Entity)
            .filter(Column::Year.eq(year))
            .filter(Column::Branch.eq(branch.as_str()))
            .filter(Column::Date.eq(date))
            .order_by_asc(students::Column::RollNo)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to query attendance: {e}"
                ))
            })?;

        Ok(rows
            .into_iter()
            .map(|(record, student)| record.into_record(student))
            .collect())
    }

    /// One row per distinct date with per-status counts, newest first.
    pub async fn attendance_statistics_impl(
        &self,
        year: i32,
        branch: Branch,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<DailyStatistics>> {
        let mut select = AttendanceRecords::find()
            .select_only()
            .column(Column::Date)
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .filter(Column::Year.eq(year))
            .filter(Column::Branch.eq(branch.as_str()));

        if let Some((start, end)) = range {
            select = select.filter(Column::Date.between(start, end));
        }

        let rows: Vec<(NaiveDate, String, i64)> = select
            .group_by(Column::Date)
            .group_by(Column::Status)
            .order_by_desc(Column::Date)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to aggregate attendance: {e}"
                ))
            })?;

        // rows arrive date-descending, so dates group contiguously
        let mut stats: Vec<DailyStatistics> = Vec::new();
        for (date, status, count) in rows {
            let Ok(status) = status.parse() else { continue };
            match stats.last_mut() {
                Some(day) if day.date == date => {
                    day.statuses.push(StatusCount { status, count });
                    day.total_students += count;
                }
                _ => stats.push(DailyStatistics {
                    date,
                    statuses: vec![StatusCount { status, count }],
                    total_students: count,
                }),
            }
        }

        Ok(stats)
    }

    pub async fn student_history_impl(
        &self,
        student_id: i64,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = AttendanceRecords::find()
            .find_also_related(students::Entity)
            .filter(Column::StudentId.eq(student_id));

        if let Some((start, end)) = range {
            select = select.filter(Column::Date.between(start, end));
        }

        let rows = select
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to query attendance history: {e}"
                ))
            })?;

        Ok(rows
            .into_iter()
            .map(|(record, student)| record.into_record(student))
            .collect())
    }

    /// Every record of one calendar day across all cohorts, ordered by
    /// branch, year, then roll number.
    pub async fn attendance_on_impl(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        let rows = AttendanceRecords::find()
            .find_also_related(students::Entity)
            .filter(Column::Date.eq(date))
            .order_by_asc(Column::Branch)
            .order_by_asc(Column::Year)
            .order_by_asc(students::Column::RollNo)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to query attendance: {e}"
                ))
            })?;

        Ok(rows
            .into_iter()
            .map(|(record, student)| record.into_record(student))
            .collect())
    }

    pub async fn attendance_between_impl(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        year: Option<i32>,
        branch: Option<Branch>,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = AttendanceRecords::find()
            .find_also_related(students::Entity)
            .filter(Column::Date.between(start, end));

        if let Some(year) = year {
            select = select.filter(Column::Year.eq(year));
        }
        if let Some(branch) = branch {
            select = select.filter(Column::Branch.eq(branch.as_str()));
        }

        let rows = select
            .order_by_desc(Column::Date)
            .order_by_asc(Column::Branch)
            .order_by_asc(Column::Year)
            .order_by_asc(students::Column::RollNo)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to query attendance: {e}"
                ))
            })?;

        Ok(rows
            .into_iter()
            .map(|(record, student)| record.into_record(student))
            .collect())
    }

    pub async fn list_attendance_impl(
        &self,
        query: AttendanceListParams,
    ) -> Result<(Vec<AttendanceRecord>, u64)> {
        let (page, limit) = query.pagination.normalized();

        let mut select = AttendanceRecords::find().find_also_related(students::Entity);

        if let Some(year) = query.year {
            select = select.filter(Column::Year.eq(year));
        }
        if let Some(ref branch) = query.branch {
            select = select.filter(Column::Branch.eq(branch.to_uppercase()));
        }
        if let Some(date) = query.date {
            select = select.filter(Column::Date.eq(date));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let paginator = select
            .order_by_desc(Column::Date)
            .order_by_asc(Column::Branch)
            .order_by_asc(Column::Year)
            .paginate(&self.db, limit);

        let total = paginator.num_items().await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to count attendance: {e}"))
        })?;

        let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to list attendance: {e}"))
        })?;

        Ok((
            rows.into_iter()
                .map(|(record, student)| record.into_record(student))
                .collect(),
            total,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::users;
    use crate::models::attendance::entities::AttendanceStatus;
    use crate::models::students::requests::CreateStudentRequest;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database};

    async fn mem_storage() -> SeaOrmStorage {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    async fn seed_user(storage: &SeaOrmStorage) -> i64 {
        let now = chrono::Utc::now().timestamp();
        let user = users::ActiveModel {
            username: Set("teacher1".to_string()),
            email: Set("teacher1@example.com".to_string()),
            password_hash: Set("x".to_string()),
            role: Set("admin".to_string()),
            status: Set("active".to_string()),
            display_name: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        user.insert(&storage.db).await.unwrap().id
    }

    fn student(branch: Branch, year: i32, roll_no: i32, admission_year: i32) -> CreateStudentRequest {
        CreateStudentRequest {
            student_name: format!("Student {roll_no}"),
            branch,
            roll_no,
            student_phone: "9876543210".to_string(),
            parent_phone: "9876543211".to_string(),
            year,
            admission_year,
        }
    }

    fn entry(student_id: i64, status: AttendanceStatus) -> AttendanceEntry {
        AttendanceEntry { student_id, status }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_roll_number_rejected() {
        let storage = mem_storage().await;
        storage
            .create_student_impl(student(Branch::CSE, 1, 10, 2024))
            .await
            .unwrap();

        let err = storage
            .create_student_impl(student(Branch::CSE, 1, 10, 2024))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AttendanceSystemError::DuplicateRollNumber(_)
        ));

        // a different admission year is a different tuple and a different uid
        let other = storage
            .create_student_impl(student(Branch::CSE, 1, 10, 2023))
            .await
            .unwrap();
        assert_eq!(other.uid, "1CSE2310");
    }

    #[tokio::test]
    async fn test_century_apart_admission_years_collide() {
        let storage = mem_storage().await;
        let first = storage
            .create_student_impl(student(Branch::CSE, 1, 10, 2024))
            .await
            .unwrap();
        assert_eq!(first.uid, "1CSE2410");

        // 2124 truncates to the same two digits as 2024: the roll tuple
        // check passes, the derived uid still collides
        let err = storage
            .create_student_impl(student(Branch::CSE, 1, 10, 2124))
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceSystemError::DuplicateUid(_)));
    }

    #[tokio::test]
    async fn test_inactive_student_still_blocks_uid() {
        let storage = mem_storage().await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 10, 2024))
            .await
            .unwrap();
        storage.deactivate_student_impl(&s1.uid).await.unwrap();

        // the roll tuple only counts active students, but the uid is
        // unique across the whole roster
        let err = storage
            .create_student_impl(student(Branch::CSE, 1, 10, 2024))
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceSystemError::DuplicateUid(_)));
    }

    #[tokio::test]
    async fn test_update_student_never_creates() {
        let storage = mem_storage().await;
        let updated = storage
            .update_student_impl("1CSE2410", student(Branch::CSE, 1, 10, 2024))
            .await
            .unwrap();
        assert!(updated.is_none());
        assert_eq!(storage.count_active_students_impl(None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_rederives_uid() {
        let storage = mem_storage().await;
        storage
            .create_student_impl(student(Branch::CSE, 1, 10, 2024))
            .await
            .unwrap();

        let mut req = student(Branch::CSE, 2, 10, 2024);
        req.student_name = "Promoted".to_string();
        let updated = storage
            .update_student_impl("1CSE2410", req)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.uid, "2CSE2410");
        assert!(storage
            .get_student_by_uid_impl("1CSE2410")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_mark_attendance_skips_unknown_students() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 1, 2024))
            .await
            .unwrap();
        let s2 = storage
            .create_student_impl(student(Branch::CSE, 1, 2, 2024))
            .await
            .unwrap();
        // belongs to a different cohort
        let other = storage
            .create_student_impl(student(Branch::ECE, 1, 1, 2024))
            .await
            .unwrap();

        let records = storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                date("2026-08-28"),
                vec![
                    entry(s1.id, AttendanceStatus::Present),
                    entry(s2.id, AttendanceStatus::Absent),
                    entry(other.id, AttendanceStatus::Present),
                    entry(99999, AttendanceStatus::Present),
                ],
                marker,
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.student_id != other.id));
        assert_eq!(records[0].student_id, s1.id);
        assert_eq!(records[0].status, AttendanceStatus::Present);
        assert_eq!(records[1].status, AttendanceStatus::Absent);
    }

    #[tokio::test]
    async fn test_double_mark_rejected_without_new_rows() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 1, 2024))
            .await
            .unwrap();
        let day = date("2026-08-28");

        storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                day,
                vec![entry(s1.id, AttendanceStatus::Present)],
                marker,
            )
            .await
            .unwrap();

        let err = storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                day,
                vec![entry(s1.id, AttendanceStatus::Absent)],
                marker,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceSystemError::AlreadyMarked(_)));

        let records = storage
            .get_attendance_by_date_impl(1, Branch::CSE, day)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn test_unique_index_rejects_mark_after_cohort_move() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 1, 2024))
            .await
            .unwrap();
        let s2 = storage
            .create_student_impl(student(Branch::CSE, 2, 2, 2024))
            .await
            .unwrap();
        let day = date("2026-08-28");

        storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                day,
                vec![entry(s1.id, AttendanceStatus::Present)],
                marker,
            )
            .await
            .unwrap();

        // move the student into year 2: the year-2 cohort pre-check no
        // longer sees the year-1 record, only the (student_id, date)
        // index does
        storage
            .update_student_impl(&s1.uid, student(Branch::CSE, 2, 1, 2024))
            .await
            .unwrap()
            .unwrap();

        let err = storage
            .mark_attendance_impl(
                2,
                Branch::CSE,
                day,
                vec![
                    entry(s1.id, AttendanceStatus::Absent),
                    entry(s2.id, AttendanceStatus::Present),
                ],
                marker,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceSystemError::AlreadyMarked(_)));

        // the whole batch rolled back, s2 got no record either
        let year2 = storage
            .get_attendance_by_date_impl(2, Branch::CSE, day)
            .await
            .unwrap();
        assert!(year2.is_empty());
        let history = storage.student_history_impl(s1.id, None).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn test_mark_with_no_resolvable_students_fails() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;

        let err = storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                date("2026-08-28"),
                vec![entry(12345, AttendanceStatus::Present)],
                marker,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceSystemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_attendance_changes_status_in_place() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 1, 2024))
            .await
            .unwrap();
        let day = date("2026-08-28");

        storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                day,
                vec![entry(s1.id, AttendanceStatus::Present)],
                marker,
            )
            .await
            .unwrap();

        let updated = storage
            .update_attendance_impl(
                1,
                Branch::CSE,
                day,
                vec![
                    entry(s1.id, AttendanceStatus::Absent),
                    // not marked, must not create a row
                    entry(54321, AttendanceStatus::Present),
                ],
                marker,
            )
            .await
            .unwrap();
        assert_eq!(updated, 1);

        let records = storage
            .get_attendance_by_date_impl(1, Branch::CSE, day)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Absent);
        assert_eq!(records[0].updated_by, Some(marker));

        // the update rewrote the row in place, it did not add a second one
        let history = storage.student_history_impl(s1.id, None).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, AttendanceStatus::Absent);
    }

    #[tokio::test]
    async fn test_statistics_newest_first() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 1, 2024))
            .await
            .unwrap();
        let s2 = storage
            .create_student_impl(student(Branch::CSE, 1, 2, 2024))
            .await
            .unwrap();

        storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                date("2026-08-27"),
                vec![
                    entry(s1.id, AttendanceStatus::Present),
                    entry(s2.id, AttendanceStatus::Present),
                ],
                marker,
            )
            .await
            .unwrap();
        storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                date("2026-08-28"),
                vec![
                    entry(s1.id, AttendanceStatus::Present),
                    entry(s2.id, AttendanceStatus::Absent),
                ],
                marker,
            )
            .await
            .unwrap();

        let stats = storage
            .attendance_statistics_impl(1, Branch::CSE, None)
            .await
            .unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].date, date("2026-08-28"));
        assert_eq!(stats[0].total_students, 2);
        assert_eq!(stats[1].date, date("2026-08-27"));
        assert_eq!(stats[1].total_students, 2);

        let absent = stats[0]
            .statuses
            .iter()
            .find(|s| s.status == AttendanceStatus::Absent)
            .unwrap();
        assert_eq!(absent.count, 1);
    }

    #[tokio::test]
    async fn test_attendance_on_is_day_scoped() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 1, 2024))
            .await
            .unwrap();

        storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                date("2026-08-27"),
                vec![entry(s1.id, AttendanceStatus::Present)],
                marker,
            )
            .await
            .unwrap();
        storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                date("2026-08-28"),
                vec![entry(s1.id, AttendanceStatus::Absent)],
                marker,
            )
            .await
            .unwrap();

        let today = storage.attendance_on_impl(date("2026-08-28")).await.unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date("2026-08-28"));
        assert_eq!(today[0].status, AttendanceStatus::Absent);
    }

    #[tokio::test]
    async fn test_deactivated_student_excluded_from_cohort() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 1, 2024))
            .await
            .unwrap();
        let s2 = storage
            .create_student_impl(student(Branch::CSE, 1, 2, 2024))
            .await
            .unwrap();
        storage.deactivate_student_impl(&s2.uid).await.unwrap();

        let records = storage
            .mark_attendance_impl(
                1,
                Branch::CSE,
                date("2026-08-28"),
                vec![
                    entry(s1.id, AttendanceStatus::Present),
                    entry(s2.id, AttendanceStatus::Present),
                ],
                marker,
            )
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].student_id, s1.id);
    }

    #[tokio::test]
    async fn test_student_history_newest_first() {
        let storage = mem_storage().await;
        let marker = seed_user(&storage).await;
        let s1 = storage
            .create_student_impl(student(Branch::CSE, 1, 1, 2024))
            .await
            .unwrap();

        for day in ["2026-08-26", "2026-08-27", "2026-08-28"] {
            storage
                .mark_attendance_impl(
                    1,
                    Branch::CSE,
                    date(day),
                    vec![entry(s1.id, AttendanceStatus::Present)],
                    marker,
                )
                .await
                .unwrap();
        }

        let history = storage.student_history_impl(s1.id, None).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].date, date("2026-08-28"));
        assert_eq!(history[2].date, date("2026-08-26"));

        let ranged = storage
            .student_history_impl(s1.id, Some((date("2026-08-26"), date("2026-08-27"))))
            .await
            .unwrap();
        assert_eq!(ranged.len(), 2);
    }
}
