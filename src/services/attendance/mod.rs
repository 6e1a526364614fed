pub mod by_date;
pub mod history;
pub mod list;
pub mod mark;
pub mod statistics;
pub mod today;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceListParams, DateRangeQuery, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::models::students::entities::Branch;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    pub async fn mark(
        &self,
        mark_request: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark(self, mark_request, request).await
    }

    pub async fn update(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
        update_request: UpdateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update(self, year, branch, date, update_request, request).await
    }

    pub async fn by_date(
        &self,
        year: i32,
        branch: Branch,
        date: NaiveDate,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        by_date::by_date(self, year, branch, date, request).await
    }

    pub async fn today(&self, today: NaiveDate, request: &HttpRequest) -> ActixResult<HttpResponse> {
        today::today(self, today, request).await
    }

    pub async fn statistics(
        &self,
        year: i32,
        branch: Branch,
        range: DateRangeQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        statistics::statistics(self, year, branch, range, request).await
    }

    pub async fn history(
        &self,
        student_id: i64,
        range: DateRangeQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        history::history(self, student_id, range, request).await
    }

    pub async fn list(
        &self,
        query: AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list(self, query, request).await
    }
}
