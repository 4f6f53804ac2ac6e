//! API utilities for frontend-backend communication
//!
//! Provides URL construction and the shared GET helper used by every list
//! fetcher. Responses are normalized into [`ListResult`] here, once.

use contracts::shared::pagination::{ListResult, PaginatedResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::config::{configured_api_base, API_PREFIX, DEFAULT_API_PORT};
use crate::shared::list_controller::FetchError;
use crate::shared::list_query::ListQuery;
use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Uses the build-time `DONATION_API_BASE_URL` when set, else the current
/// window location on the API port.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = configured_api_base() {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path relative to `/api/v1`
///
/// # Example
/// ```ignore
/// let url = api_url("/campaigns/public");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{}{}/{}", base.trim_end_matches('/'), API_PREFIX, path)
}

pub fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Extract a readable message from an error body.
///
/// The API answers `{"detail": "..."}` or, for validation errors,
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn parse_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// GET a paginated list endpoint with the composed query parameters
pub async fn get_list<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
) -> Result<ListResult<T>, FetchError> {
    let params = query
        .to_query_string()
        .map_err(|e| FetchError::Network(format!("Failed to encode query: {}", e)))?;
    let url = format!("{}?{}", api_url(path), params);
    log::debug!("GET {} ({})", url, query.mode.as_str());

    let mut request = Request::get(&url).header("Accept", "application/json");
    if let Some(auth) = auth_header() {
        request = request.header("Authorization", &auth);
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read response: {}", e)))?;

    if !response.ok() {
        if status == 401 {
            storage::clear_tokens();
        }
        let detail = parse_error_detail(&body).unwrap_or_else(|| response.status_text());
        return Err(FetchError::Server { status, detail });
    }

    let parsed: PaginatedResponse<T> = serde_json::from_str(&body)
        .map_err(|e| FetchError::Decode(format!("Failed to parse response: {}", e)))?;
    Ok(ListResult::from(parsed))
}

/// PUT a JSON body, discarding the response
pub async fn put_json<B: serde::Serialize>(path: &str, body: &B) -> Result<(), FetchError> {
    let auth = auth_header().ok_or_else(|| FetchError::Server {
        status: 401,
        detail: "Not authenticated".to_string(),
    })?;

    let response = Request::put(&api_url(path))
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| FetchError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = parse_error_detail(&body).unwrap_or_else(|| response.status_text());
        return Err(FetchError::Server { status, detail });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000/", "/campaigns/public"),
            "http://localhost:8000/api/v1/campaigns/public"
        );
        assert_eq!(join_url("", "users"), "/api/v1/users");
    }

    #[test]
    fn test_parse_error_detail_string() {
        assert_eq!(
            parse_error_detail(r#"{"detail":"Not enough permissions"}"#).as_deref(),
            Some("Not enough permissions")
        );
    }

    #[test]
    fn test_parse_error_detail_validation_list() {
        let body = r#"{"detail":[{"loc":["query","page"],"msg":"must be >= 1"},{"msg":"bad size"}]}"#;
        assert_eq!(parse_error_detail(body).as_deref(), Some("must be >= 1; bad size"));
    }

    #[test]
    fn test_parse_error_detail_garbage() {
        assert_eq!(parse_error_detail("<html>502</html>"), None);
        assert_eq!(parse_error_detail(r#"{"error":"x"}"#), None);
        assert_eq!(parse_error_detail(r#"{"detail":[]}"#), None);
    }
}
