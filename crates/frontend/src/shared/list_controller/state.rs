use crate::shared::list_query::{FilterValue, ListQueryState};
use crate::shared::pagination::{compute_window, PageWindow};

/// Snapshot of a list screen
#[derive(Clone, Debug, PartialEq)]
pub struct ListViewState<T> {
    /// Page, keyword, filters and sort of the last issued request
    pub query: ListQueryState,

    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_items: u64,

    pub loading: bool,
    pub error: Option<String>,
    /// At least one fetch succeeded
    pub is_loaded: bool,
}

impl<T> ListViewState<T> {
    pub fn new(query: ListQueryState) -> Self {
        Self {
            query,
            items: Vec::new(),
            total_pages: 0,
            total_items: 0,
            loading: false,
            error: None,
            is_loaded: false,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.query.page
    }

    pub fn keyword(&self) -> &str {
        &self.query.keyword
    }

    pub fn filter(&self, name: &str) -> FilterValue {
        self.query.filter(name)
    }

    pub fn sort(&self) -> Option<&str> {
        self.query.sort.as_deref()
    }

    pub fn page_window(&self, window_size: usize) -> PageWindow {
        compute_window(
            self.query.page as usize,
            self.total_pages as usize,
            window_size,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.is_loaded && self.items.is_empty()
    }
}
