pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RefreshRequest};
pub use responses::{LoginResponse, RefreshResponse};
