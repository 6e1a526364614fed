use serde::Serialize;

/// Unified API response envelope, mirroring the contract the frontend
/// already consumes: `{success, data?, message?, count?, total?,
/// totalPages?, currentPage?}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            count: None,
            total: None,
            total_pages: None,
            current_page: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }

    /// List response carrying the item count alongside the data
    pub fn list(data: T, count: i64) -> Self {
        Self {
            count: Some(count),
            ..Self::success(data)
        }
    }

    /// Paginated list response
    pub fn paginated(data: T, count: i64, total: i64, total_pages: i64, current_page: i64) -> Self {
        Self {
            count: Some(count),
            total: Some(total),
            total_pages: Some(total_pages),
            current_page: Some(current_page),
            ..Self::success(data)
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            count: None,
            total: None,
            total_pages: None,
            current_page: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::message(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(vec![1, 2, 3]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("message").is_none());
        assert!(json.get("total").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let resp = ApiResponse::<()>::error("Student not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Student not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_paginated_envelope_uses_camel_case_keys() {
        let resp = ApiResponse::paginated(vec!["a"], 1, 25, 3, 2);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["total"], 25);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["currentPage"], 2);
    }
}
