use async_trait::async_trait;
use contracts::domain::a002_donation::Donation;
use contracts::shared::pagination::ListResult;

use crate::shared::api_utils::get_list;
use crate::shared::list_controller::{FetchError, ListFetcher};
use crate::shared::list_query::ListQuery;

const ADMIN_PATH: &str = "/donations";

/// Donations for the admin table.
///
/// One endpoint serves both; in search mode `keyword` rides along as a
/// query parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminDonationsFetcher;

#[async_trait(?Send)]
impl ListFetcher<Donation> for AdminDonationsFetcher {
    async fn fetch_list(&self, query: ListQuery) -> Result<ListResult<Donation>, FetchError> {
        get_list(ADMIN_PATH, &query).await
    }

    async fn search_list(&self, _keyword: &str, query: ListQuery) -> Result<ListResult<Donation>, FetchError> {
        get_list(ADMIN_PATH, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::join_url;

    #[test]
    fn test_donations_share_the_admin_list_endpoint() {
        assert_eq!(join_url("", ADMIN_PATH), "/api/v1/donations");
    }
}
