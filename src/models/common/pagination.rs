use serde::Deserialize;

// Pagination query parameters, defaults page=1 limit=10
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub limit: i64,
}

impl PaginationQuery {
    /// Page clamped to >= 1, limit clamped to 1..=100
    pub fn normalized(&self) -> (u64, u64) {
        (self.page.max(1) as u64, self.limit.clamp(1, 100) as u64)
    }

    pub fn total_pages(total: u64, limit: u64) -> i64 {
        (total.div_ceil(limit.max(1))) as i64
    }
}

// Query strings deliver numbers as strings; accept both
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = PaginationQuery::default();
        assert_eq!((q.page, q.limit), (1, 10));
    }

    #[test]
    fn test_normalized_clamps() {
        let q = PaginationQuery { page: 0, limit: 500 };
        assert_eq!(q.normalized(), (1, 100));
        let q = PaginationQuery { page: 3, limit: 25 };
        assert_eq!(q.normalized(), (3, 25));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(PaginationQuery::total_pages(0, 10), 0);
        assert_eq!(PaginationQuery::total_pages(10, 10), 1);
        assert_eq!(PaginationQuery::total_pages(11, 10), 2);
    }

    #[test]
    fn test_accepts_string_values() {
        let q: PaginationQuery = serde_json::from_str(r#"{"page":"2","limit":"50"}"#).unwrap();
        assert_eq!((q.page, q.limit), (2, 50));
    }
}
