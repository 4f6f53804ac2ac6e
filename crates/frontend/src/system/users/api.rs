use async_trait::async_trait;
use contracts::shared::pagination::ListResult;
use contracts::system::users::{User, UserStatus, UserStatusUpdateDto};

use crate::shared::api_utils::{get_list, put_json};
use crate::shared::list_controller::{FetchError, ListFetcher};
use crate::shared::list_query::ListQuery;

const USERS_PATH: &str = "/users";

/// Registered users for the admin table; search goes to the same endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct UsersFetcher;

#[async_trait(?Send)]
impl ListFetcher<User> for UsersFetcher {
    async fn fetch_list(&self, query: ListQuery) -> Result<ListResult<User>, FetchError> {
        get_list(USERS_PATH, &query).await
    }

    async fn search_list(&self, _keyword: &str, query: ListQuery) -> Result<ListResult<User>, FetchError> {
        get_list(USERS_PATH, &query).await
    }
}

/// Activate or suspend a user
pub async fn update_user_status(id: i64, status: UserStatus) -> Result<(), FetchError> {
    put_json(&format!("{}/{}/status", USERS_PATH, id), &UserStatusUpdateDto { status }).await
}
