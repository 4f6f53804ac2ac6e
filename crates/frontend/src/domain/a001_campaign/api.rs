use async_trait::async_trait;
use contracts::domain::a001_campaign::Campaign;
use contracts::shared::pagination::ListResult;

use crate::shared::api_utils::get_list;
use crate::shared::list_controller::{FetchError, ListFetcher};
use crate::shared::list_query::ListQuery;

const PUBLIC_PATH: &str = "/campaigns/public";
const ADMIN_PATH: &str = "/campaigns/admin/paginated";
const SEARCH_PATH: &str = "/campaigns/search";

/// Campaigns visible to visitors
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicCampaignsFetcher;

#[async_trait(?Send)]
impl ListFetcher<Campaign> for PublicCampaignsFetcher {
    async fn fetch_list(&self, query: ListQuery) -> Result<ListResult<Campaign>, FetchError> {
        get_list(PUBLIC_PATH, &query).await
    }

    async fn search_list(&self, _keyword: &str, query: ListQuery) -> Result<ListResult<Campaign>, FetchError> {
        get_list(SEARCH_PATH, &query).await
    }
}

/// All campaigns, any status (admin token required)
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminCampaignsFetcher;

#[async_trait(?Send)]
impl ListFetcher<Campaign> for AdminCampaignsFetcher {
    async fn fetch_list(&self, query: ListQuery) -> Result<ListResult<Campaign>, FetchError> {
        get_list(ADMIN_PATH, &query).await
    }

    async fn search_list(&self, _keyword: &str, query: ListQuery) -> Result<ListResult<Campaign>, FetchError> {
        get_list(SEARCH_PATH, &query).await
    }
}
