use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Forget the session after the API rejected the token
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        log::info!("clearing stored session");
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
