use super::SeaOrmStorage;
use crate::entity::prelude::{StudentActiveModel, Students};
use crate::entity::students::Column;
use crate::errors::{AttendanceSystemError, Result};
use crate::models::students::{
    entities::{Branch, Student},
    requests::{CreateStudentRequest, StudentBulkUpdateData, UpdateStudentRequest},
    responses::{
        BranchStat, BranchYearStat, StudentStatisticsResponse, YearCount, YearStat,
    },
};
use crate::utils::uid::generate_uid;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::collections::BTreeMap;

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let msg = err.to_string();
    msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value")
        || msg.contains("Duplicate entry")
}

impl SeaOrmStorage {
    /// Registers a student. The uid is derived here, never taken from the
    /// request. Both duplicate checks run independently: the roll tuple
    /// check catches same (branch, year, rollNo, admissionYear) among
    /// active students, the uid check catches collisions the tuple check
    /// misses (admission years a century apart truncate to the same two
    /// digits, and the uid stays unique across inactive students too).
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let uid = generate_uid(req.year, req.branch.as_str(), req.admission_year, req.roll_no);

        let tuple_taken = Students::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Year.eq(req.year))
            .filter(Column::Branch.eq(req.branch.as_str()))
            .filter(Column::RollNo.eq(req.roll_no))
            .filter(Column::AdmissionYear.eq(req.admission_year))
            .one(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to query student: {e}"))
            })?;
        if tuple_taken.is_some() {
            return Err(AttendanceSystemError::duplicate_roll_number(format!(
                "roll number {} already exists in year {} {}",
                req.roll_no, req.year, req.branch
            )));
        }

        let uid_taken = self.get_student_by_uid_impl(&uid).await?;
        if uid_taken.is_some() {
            return Err(AttendanceSystemError::duplicate_uid(format!(
                "a student with UID {uid} already exists"
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let model = StudentActiveModel {
            student_name: Set(req.student_name.trim().to_string()),
            uid: Set(uid.clone()),
            branch: Set(req.branch.as_str().to_string()),
            roll_no: Set(req.roll_no),
            student_phone: Set(req.student_phone),
            parent_phone: Set(req.parent_phone),
            year: Set(req.year),
            admission_year: Set(req.admission_year),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // the unique index on uid is the authoritative duplicate signal;
        // the pre-checks above only exist for better error messages
        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                AttendanceSystemError::duplicate_uid(format!(
                    "a student with UID {uid} already exists"
                ))
            } else {
                AttendanceSystemError::database_operation(format!("failed to create student: {e}"))
            }
        })?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_uid_impl(&self, uid: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Uid.eq(uid))
            .one(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to query student: {e}"))
            })?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn list_students_impl(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
        search: Option<String>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Student>, u64)> {
        let mut select = Students::find().filter(Column::IsActive.eq(true));

        if let Some(branch) = branch {
            select = select.filter(Column::Branch.eq(branch.as_str()));
        }
        if let Some(year) = year {
            select = select.filter(Column::Year.eq(year));
        }
        if let Some(ref search) = search
            && !search.trim().is_empty()
        {
            let escaped = crate::utils::escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::StudentName.contains(&escaped))
                    .add(Column::Uid.contains(&escaped.to_uppercase())),
            );
        }

        let paginator = select
            .order_by_asc(Column::Branch)
            .order_by_asc(Column::Year)
            .order_by_asc(Column::RollNo)
            .paginate(&self.db, limit);

        let total = paginator.num_items().await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to count students: {e}"))
        })?;

        let models = paginator.fetch_page(page - 1).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to list students: {e}"))
        })?;

        Ok((models.into_iter().map(|m| m.into_student()).collect(), total))
    }

    pub async fn list_students_by_branch_impl(
        &self,
        branch: Branch,
        year: Option<i32>,
    ) -> Result<Vec<Student>> {
        let mut select = Students::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Branch.eq(branch.as_str()));

        if let Some(year) = year {
            select = select.filter(Column::Year.eq(year));
        }

        let models = select
            .order_by_asc(Column::Year)
            .order_by_asc(Column::RollNo)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to list students: {e}"))
            })?;

        Ok(models.into_iter().map(|m| m.into_student()).collect())
    }

    pub async fn list_students_by_year_impl(
        &self,
        year: i32,
        branch: Option<Branch>,
    ) -> Result<Vec<Student>> {
        let mut select = Students::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Year.eq(year));

        if let Some(branch) = branch {
            select = select.filter(Column::Branch.eq(branch.as_str()));
        }

        let models = select
            .order_by_asc(Column::Branch)
            .order_by_asc(Column::RollNo)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to list students: {e}"))
            })?;

        Ok(models.into_iter().map(|m| m.into_student()).collect())
    }

    pub async fn list_cohort_impl(&self, year: i32, branch: Branch) -> Result<Vec<Student>> {
        let models = Students::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Year.eq(year))
            .filter(Column::Branch.eq(branch.as_str()))
            .order_by_asc(Column::RollNo)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to list cohort: {e}"))
            })?;

        Ok(models.into_iter().map(|m| m.into_student()).collect())
    }

    /// Full-field update addressed by uid. Never creates; the uid is
    /// re-derived from the new fields and both duplicate checks run again,
    /// excluding the student itself.
    pub async fn update_student_impl(
        &self,
        uid: &str,
        req: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = Students::find()
            .filter(Column::Uid.eq(uid))
            .one(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to query student: {e}"))
            })?
        else {
            return Ok(None);
        };

        let new_uid =
            generate_uid(req.year, req.branch.as_str(), req.admission_year, req.roll_no);

        let tuple_taken = Students::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Year.eq(req.year))
            .filter(Column::Branch.eq(req.branch.as_str()))
            .filter(Column::RollNo.eq(req.roll_no))
            .filter(Column::AdmissionYear.eq(req.admission_year))
            .filter(Column::Id.ne(existing.id))
            .one(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to query student: {e}"))
            })?;
        if tuple_taken.is_some() {
            return Err(AttendanceSystemError::duplicate_roll_number(format!(
                "roll number {} already exists in year {} {}",
                req.roll_no, req.year, req.branch
            )));
        }

        let uid_taken = Students::find()
            .filter(Column::Uid.eq(&new_uid))
            .filter(Column::Id.ne(existing.id))
            .one(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to query student: {e}"))
            })?;
        if uid_taken.is_some() {
            return Err(AttendanceSystemError::duplicate_uid(format!(
                "a student with UID {new_uid} already exists"
            )));
        }

        let mut active: StudentActiveModel = existing.into();
        active.student_name = Set(req.student_name.trim().to_string());
        active.uid = Set(new_uid.clone());
        active.branch = Set(req.branch.as_str().to_string());
        active.roll_no = Set(req.roll_no);
        active.student_phone = Set(req.student_phone);
        active.parent_phone = Set(req.parent_phone);
        active.year = Set(req.year);
        active.admission_year = Set(req.admission_year);
        active.updated_at = Set(chrono::Utc::now().timestamp());

        let result = active.update(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                AttendanceSystemError::duplicate_uid(format!(
                    "a student with UID {new_uid} already exists"
                ))
            } else {
                AttendanceSystemError::database_operation(format!("failed to update student: {e}"))
            }
        })?;

        Ok(Some(result.into_student()))
    }

    /// Soft delete; attendance history is retained.
    pub async fn deactivate_student_impl(&self, uid: &str) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Uid.eq(uid))
            .filter(Column::IsActive.eq(true))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to deactivate student: {e}"
                ))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn bulk_update_students_impl(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
        update: StudentBulkUpdateData,
    ) -> Result<u64> {
        let mut query = Students::update_many().filter(Column::IsActive.eq(true));

        if let Some(branch) = branch {
            query = query.filter(Column::Branch.eq(branch.as_str()));
        }
        if let Some(year) = year {
            query = query.filter(Column::Year.eq(year));
        }

        let mut touched = false;
        if let Some(name) = update.student_name {
            query = query.col_expr(Column::StudentName, Expr::value(name.trim().to_string()));
            touched = true;
        }
        if let Some(phone) = update.student_phone {
            query = query.col_expr(Column::StudentPhone, Expr::value(phone));
            touched = true;
        }
        if let Some(phone) = update.parent_phone {
            query = query.col_expr(Column::ParentPhone, Expr::value(phone));
            touched = true;
        }
        if !touched {
            return Ok(0);
        }

        let result = query
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to bulk update students: {e}"
                ))
            })?;

        Ok(result.rows_affected)
    }

    pub async fn bulk_deactivate_students_impl(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
    ) -> Result<u64> {
        let mut query = Students::update_many().filter(Column::IsActive.eq(true));

        if let Some(branch) = branch {
            query = query.filter(Column::Branch.eq(branch.as_str()));
        }
        if let Some(year) = year {
            query = query.filter(Column::Year.eq(year));
        }

        let result = query
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to bulk deactivate students: {e}"
                ))
            })?;

        Ok(result.rows_affected)
    }

    /// Roster aggregation over active students: one grouped query, the
    /// three breakdowns are assembled in memory.
    pub async fn student_statistics_impl(&self) -> Result<StudentStatisticsResponse> {
        let rows: Vec<(String, i32, i64)> = Students::find()
            .select_only()
            .column(Column::Branch)
            .column(Column::Year)
            .column_as(Column::Id.count(), "count")
            .filter(Column::IsActive.eq(true))
            .group_by(Column::Branch)
            .group_by(Column::Year)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!(
                    "failed to aggregate students: {e}"
                ))
            })?;

        let mut total = 0i64;
        let mut by_branch: BTreeMap<String, i64> = BTreeMap::new();
        let mut by_year: BTreeMap<i32, i64> = BTreeMap::new();
        let mut by_branch_year: BTreeMap<String, BTreeMap<i32, i64>> = BTreeMap::new();

        for (branch, year, count) in rows {
            total += count;
            *by_branch.entry(branch.clone()).or_default() += count;
            *by_year.entry(year).or_default() += count;
            *by_branch_year.entry(branch).or_default().entry(year).or_default() += count;
        }

        let branch_stats = by_branch
            .iter()
            .filter_map(|(branch, &count)| {
                branch
                    .parse::<Branch>()
                    .ok()
                    .map(|branch| BranchStat { branch, count })
            })
            .collect();

        let year_stats = by_year
            .iter()
            .map(|(&year, &count)| YearStat { year, count })
            .collect();

        let branch_year_stats = by_branch_year
            .into_iter()
            .filter_map(|(branch, years)| {
                let branch = branch.parse::<Branch>().ok()?;
                let total_count = years.values().sum();
                let years = years
                    .into_iter()
                    .map(|(year, count)| YearCount { year, count })
                    .collect();
                Some(BranchYearStat {
                    branch,
                    years,
                    total_count,
                })
            })
            .collect();

        Ok(StudentStatisticsResponse {
            total_students: total,
            branch_stats,
            year_stats,
            branch_year_stats,
        })
    }

    pub async fn list_branches_impl(&self) -> Result<Vec<Branch>> {
        let rows: Vec<String> = Students::find()
            .select_only()
            .column(Column::Branch)
            .filter(Column::IsActive.eq(true))
            .group_by(Column::Branch)
            .order_by_asc(Column::Branch)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to list branches: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|b| b.parse::<Branch>().ok())
            .collect())
    }

    pub async fn count_active_students_impl(&self, branch: Option<Branch>) -> Result<u64> {
        let mut select = Students::find().filter(Column::IsActive.eq(true));
        if let Some(branch) = branch {
            select = select.filter(Column::Branch.eq(branch.as_str()));
        }

        select.count(&self.db).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to count students: {e}"))
        })
    }
}
