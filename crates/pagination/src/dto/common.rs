use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::query::QueryParams;
use crate::range::total_pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams, ToSchema)]
pub struct PageRequest {
    #[validate(range(min = 1, message = "page must be >= 1"))]
    #[serde(default = "default_page")]
    pub page: u32,
    #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Slices an in-memory collection into the requested page.
    pub fn paginate<T: Clone>(&self, items: &[T]) -> PaginatedResponse<T> {
        let len = items.len();
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = start
            .saturating_add(usize::try_from(self.limit()).unwrap_or(usize::MAX))
            .min(len);

        PaginatedResponse::new(
            items[start..end].to_vec(),
            self.page,
            self.page_size,
            len as u64,
        )
    }
}

impl From<QueryParams> for PageRequest {
    fn from(query: QueryParams) -> Self {
        Self {
            page: query.page,
            page_size: query.page_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            page,
            page_size,
            total_items,
            total_pages: total_pages(total_items, page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let request = PageRequest::new(3, 20);
        assert_eq!(request.offset(), 40);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn test_defaults_from_empty_query() {
        let request: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 20);
    }

    #[test]
    fn test_validation() {
        assert!(PageRequest::new(1, 20).validate().is_ok());
        assert!(PageRequest::new(0, 20).validate().is_err());
        assert!(PageRequest::new(1, 0).validate().is_err());
        assert!(PageRequest::new(1, 101).validate().is_err());
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<u32> = (0..95).collect();
        let response = PageRequest::new(5, 20).paginate(&items);

        assert_eq!(response.data, (80..95u32).collect::<Vec<_>>());
        assert_eq!(response.pagination.total_items, 95);
        assert_eq!(response.pagination.total_pages, 5);
    }

    #[test]
    fn test_paginate_past_the_end() {
        let items: Vec<u32> = (0..10).collect();
        let response = PageRequest::new(4, 20).paginate(&items);

        assert!(response.data.is_empty());
        assert_eq!(response.pagination.page, 4);
        assert_eq!(response.pagination.total_items, 10);
        assert_eq!(response.pagination.total_pages, 1);
    }

    #[test]
    fn test_meta_empty() {
        let meta = PaginationMeta::new(1, 20, 0);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_from_query_params() {
        let query = QueryParams {
            page: 2,
            page_size: 50,
            offset: 50,
            limit: 50,
        };
        let request = PageRequest::from(query);
        assert_eq!(request.offset(), query.offset);
    }

    #[test]
    fn test_response_wire_format() {
        let response = PaginatedResponse::new(vec!["a"], 1, 20, 1);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": ["a"],
                "pagination": {"page": 1, "page_size": 20, "total_items": 1, "total_pages": 1}
            })
        );
    }
}
