use async_trait::async_trait;
use contracts::shared::pagination::ListResult;
use thiserror::Error;

use crate::shared::list_query::{ListQuery, QueryMode};

/// Failure of a list request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {detail}")]
    Server { status: u16, detail: String },
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Request rejected before reaching the network
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("page {page} outside 1..={total_pages}")]
    PageOutOfRange { page: u32, total_pages: u32 },
}

/// Remote source of one entity list.
///
/// Implementations normalize the backend response into [`ListResult`].
#[async_trait(?Send)]
pub trait ListFetcher<T> {
    async fn fetch_list(&self, query: ListQuery) -> Result<ListResult<T>, FetchError>;

    async fn search_list(&self, keyword: &str, query: ListQuery) -> Result<ListResult<T>, FetchError>;
}

/// Route a query to the endpoint variant selected by its mode
pub async fn dispatch<T, F>(fetcher: &F, query: ListQuery) -> Result<ListResult<T>, FetchError>
where
    F: ListFetcher<T> + ?Sized,
{
    match query.mode {
        QueryMode::List => fetcher.fetch_list(query).await,
        QueryMode::Search => {
            let keyword = query.keyword.clone().unwrap_or_default();
            fetcher.search_list(&keyword, query).await
        }
    }
}
