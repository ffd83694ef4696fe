//! Request DTOs for the front-end API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::catalog::SortOrder;

/// Request body for PUT /search/query
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// Search text; surrounding whitespace is ignored
    #[serde(default)]
    pub query: String,
}

/// Request body for PUT /search/platforms
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformsRequest {
    /// Selected platform ids, in any order
    #[serde(default)]
    pub platform_ids: Vec<u32>,
}

impl PlatformsRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.platform_ids.contains(&0) {
            return Some("Platform ids must be positive".to_string());
        }
        None
    }
}

/// Request body for PUT /search/ordering
#[derive(Debug, Clone, Deserialize)]
pub struct OrderingRequest {
    /// Wire form such as `-rating` or `released`
    pub ordering: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortField;

    #[test]
    fn test_query_request_deserialize() {
        let req: QueryRequest = serde_json::from_str(r#"{"query": "mario"}"#).unwrap();
        assert_eq!(req.query, "mario");

        let empty: QueryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.query, "");
    }

    #[test]
    fn test_platforms_request_validate() {
        let req: PlatformsRequest =
            serde_json::from_str(r#"{"platform_ids": [4, 187]}"#).unwrap();
        assert!(req.validate().is_none());

        let bad = PlatformsRequest {
            platform_ids: vec![4, 0],
        };
        assert!(bad.validate().is_some());
    }

    #[test]
    fn test_ordering_request_deserialize() {
        let req: OrderingRequest = serde_json::from_str(r#"{"ordering": "-released"}"#).unwrap();
        assert_eq!(req.ordering, SortOrder::descending(SortField::Released));

        assert!(serde_json::from_str::<OrderingRequest>(r#"{"ordering": "-hype"}"#).is_err());
    }
}
