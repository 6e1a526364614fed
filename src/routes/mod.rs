pub mod attendance;
pub mod auth;
pub mod reports;
pub mod students;
pub mod teams;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use reports::configure_report_routes;
pub use students::configure_student_routes;
pub use teams::configure_team_routes;
