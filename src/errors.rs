//! Unified error handling module.
//!
//! Error types are generated by a macro so every variant carries a stable
//! code and a human-readable type name.

use std::fmt;

/// Defines the system error enum.
///
/// Generates:
/// - the enum itself
/// - code() - stable error code
/// - error_type() - error type name
/// - message() - error detail
/// - snake_case convenience constructors
macro_rules! define_attendance_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AttendanceSystemError {
            $($variant(String),)*
        }

        impl AttendanceSystemError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(AttendanceSystemError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AttendanceSystemError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(AttendanceSystemError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl AttendanceSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AttendanceSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_attendance_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    DuplicateUid("E005", "Duplicate UID"),
    DuplicateRollNumber("E006", "Duplicate Roll Number"),
    AlreadyMarked("E007", "Attendance Already Marked"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
}

impl AttendanceSystemError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AttendanceSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AttendanceSystemError {}

impl From<sea_orm::DbErr> for AttendanceSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        AttendanceSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for AttendanceSystemError {
    fn from(err: std::io::Error) -> Self {
        AttendanceSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AttendanceSystemError {
    fn from(err: serde_json::Error) -> Self {
        AttendanceSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AttendanceSystemError {
    fn from(err: chrono::ParseError) -> Self {
        AttendanceSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AttendanceSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AttendanceSystemError::validation("test").code(), "E004");
        assert_eq!(AttendanceSystemError::duplicate_uid("test").code(), "E005");
        assert_eq!(
            AttendanceSystemError::duplicate_roll_number("test").code(),
            "E006"
        );
        assert_eq!(AttendanceSystemError::already_marked("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AttendanceSystemError::duplicate_uid("test").error_type(),
            "Duplicate UID"
        );
        assert_eq!(
            AttendanceSystemError::already_marked("test").error_type(),
            "Attendance Already Marked"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AttendanceSystemError::validation("Invalid phone number");
        assert_eq!(err.message(), "Invalid phone number");
    }

    #[test]
    fn test_format_simple() {
        let err = AttendanceSystemError::not_found("Student not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Student not found"));
    }
}
