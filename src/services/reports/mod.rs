pub mod attendance_report;
pub mod dashboard;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::models::reports::requests::AttendanceReportQuery;
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    pub async fn dashboard(
        &self,
        today: NaiveDate,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        dashboard::dashboard(self, today, request).await
    }

    pub async fn attendance_report(
        &self,
        query: AttendanceReportQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attendance_report::attendance_report(self, query, request).await
    }
}
