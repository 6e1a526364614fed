pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod uid;
pub mod validate;

pub use extractor::{SafeBranch, SafeDate, SafeIDI64, SafeUid, SafeYear};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
