//! Endpoint URL helpers.

/// Strip trailing slashes so paths can be appended without doubling them.
///
/// ```
/// use portfolio_assistant::utils::url::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url("https://assistant.example.com//"),
///     "https://assistant.example.com"
/// );
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join an endpoint origin and a request path with exactly one slash.
///
/// ```
/// use portfolio_assistant::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://assistant.example.com/", "/chat"),
///     "https://assistant.example.com/chat"
/// );
/// ```
pub fn construct_api_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        normalize_base_url(base_url),
        path.trim_start_matches('/')
    )
}
