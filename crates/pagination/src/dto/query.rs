use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Parameters sent with a remote fetch for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub page: u32,
    pub page_size: u32,
    pub offset: u64,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let params = QueryParams {
            page: 3,
            page_size: 20,
            offset: 40,
            limit: 20,
        };
        let json = serde_json::to_value(params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 3, "pageSize": 20, "offset": 40, "limit": 20})
        );
    }
}
