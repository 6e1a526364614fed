pub mod branch_detail;
pub mod branches;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::models::students::entities::Branch;
use crate::storage::Storage;

pub struct TeamService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeamService {
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

    pub async fn branches(
        &self,
        today: NaiveDate,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        branches::branches(self, today, request).await
    }

    pub async fn branch_detail(
        &self,
        branch: Branch,
        today: NaiveDate,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        branch_detail::branch_detail(self, branch, today, request).await
    }
}
