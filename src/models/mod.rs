pub mod attendance;
pub mod auth;
pub mod common;
pub mod reports;
pub mod students;
pub mod teams;
pub mod users;

pub use common::pagination::PaginationQuery;
pub use common::response::ApiResponse;

// Recorded at process start
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
