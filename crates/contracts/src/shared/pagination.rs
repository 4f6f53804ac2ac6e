//! Pagination envelope returned by the list endpoints and the normalized
//! result consumed by list screens.

use serde::{Deserialize, Serialize};

/// Pagination metadata as sent by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub previous_page: Option<u32>,
}

/// Raw list response. Some endpoints omit `pagination`, so it stays optional
/// here and is resolved exactly once by [`ListResult::from`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

/// One page of a list, with totals. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_items: u64,
}

impl<T> ListResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            total_items: 0,
        }
    }

    /// A response without pagination metadata is treated as a single page
    /// holding every item.
    pub fn single_page(items: Vec<T>) -> Self {
        let total_items = items.len() as u64;
        let total_pages = if items.is_empty() { 0 } else { 1 };
        Self {
            items,
            total_pages,
            total_items,
        }
    }
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<PaginatedResponse<T>> for ListResult<T> {
    fn from(response: PaginatedResponse<T>) -> Self {
        match response.pagination {
            Some(meta) => {
                // total_items may be reported without total_pages on some endpoints
                let total_pages = if meta.total_pages == 0 && meta.total_items > 0 && meta.page_size > 0 {
                    meta.total_items.div_ceil(meta.page_size as u64) as u32
                } else {
                    meta.total_pages
                };
                Self {
                    items: response.items,
                    total_pages,
                    total_items: meta.total_items,
                }
            }
            None => Self::single_page(response.items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_with_pagination() {
        let json = r#"{
            "items": [1, 2, 3],
            "pagination": {
                "current_page": 2,
                "page_size": 3,
                "total_items": 20,
                "total_pages": 7,
                "has_next": true,
                "has_previous": true,
                "next_page": 3,
                "previous_page": 1
            }
        }"#;
        let response: PaginatedResponse<i32> = serde_json::from_str(json).unwrap();
        let result = ListResult::from(response);
        assert_eq!(result.items, vec![1, 2, 3]);
        assert_eq!(result.total_pages, 7);
        assert_eq!(result.total_items, 20);
    }

    #[test]
    fn test_normalize_without_pagination() {
        let response: PaginatedResponse<i32> = serde_json::from_str(r#"{"items":[4,5]}"#).unwrap();
        let result = ListResult::from(response);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_items, 2);
    }

    #[test]
    fn test_normalize_empty_body() {
        let response: PaginatedResponse<i32> = serde_json::from_str("{}").unwrap();
        assert_eq!(ListResult::from(response), ListResult::empty());
    }

    #[test]
    fn test_missing_total_pages_is_derived() {
        let json = r#"{"items":[1],"pagination":{"current_page":1,"page_size":10,
            "total_items":21,"total_pages":0}}"#;
        let response: PaginatedResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(ListResult::from(response).total_pages, 3);
    }
}
