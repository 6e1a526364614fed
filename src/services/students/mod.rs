pub mod branches;
pub mod bulk_delete;
pub mod bulk_update;
pub mod by_branch;
pub mod by_year;
pub mod cohort;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod statistics;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::{
    entities::Branch,
    requests::{
        CreateStudentRequest, StudentBulkUpdateData, StudentListParams, UpdateStudentRequest,
    },
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    pub async fn get_student(&self, uid: String, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_student(self, uid, request).await
    }

    pub async fn update_student(
        &self,
        uid: String,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, uid, update_data, request).await
    }

    pub async fn delete_student(
        &self,
        uid: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, uid, request).await
    }

    pub async fn students_by_branch(
        &self,
        branch: Branch,
        year: Option<i32>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        by_branch::students_by_branch(self, branch, year, request).await
    }

    pub async fn students_by_year(
        &self,
        year: i32,
        branch: Option<Branch>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        by_year::students_by_year(self, year, branch, request).await
    }

    pub async fn cohort(
        &self,
        year: i32,
        branch: Branch,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        cohort::cohort(self, year, branch, request).await
    }

    pub async fn bulk_update(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
        update_data: StudentBulkUpdateData,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk_update::bulk_update(self, branch, year, update_data, request).await
    }

    pub async fn bulk_delete(
        &self,
        branch: Option<Branch>,
        year: Option<i32>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk_delete::bulk_delete(self, branch, year, request).await
    }

    pub async fn statistics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        statistics::statistics(self, request).await
    }

    pub async fn branches(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        branches::branches(self, request).await
    }
}

/// Field validation shared by create and update. The current year is read
/// once by the caller so the admission-year bound stays deterministic.
pub(crate) fn validate_student_fields(
    data: &CreateStudentRequest,
    current_year: i32,
) -> Result<(), &'static str> {
    crate::utils::validate::validate_student_name(&data.student_name)?;
    crate::utils::validate::validate_phone(&data.student_phone)?;
    crate::utils::validate::validate_phone(&data.parent_phone)?;
    crate::utils::validate::validate_year(data.year)?;
    crate::utils::validate::validate_roll_no(data.roll_no)?;
    crate::utils::validate::validate_admission_year(data.admission_year, current_year)?;
    Ok(())
}
