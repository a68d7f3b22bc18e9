use crate::server::error::AppError;

/// Parses a post id taken from a URL path segment.
///
/// Only plain ASCII digits are accepted, so `+5`, ` 5` and `-1` do not resolve to
/// a post.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::NotFound(_))` - The segment is not a valid post id
pub fn parse_post_id(value: &str) -> Result<i32, AppError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(format!("Invalid post id {:?}", value)));
    }

    value
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("Post id {} out of range", value)))
}

/// Returns the last value of `key` in a raw query string.
///
/// Repeated keys never reject the request; the last occurrence wins. Invalid
/// percent-encoding is decoded lossily.
///
/// # Arguments
/// - `query` - Raw query string without the leading `?`, `None` when absent
/// - `key` - Parameter name to look up
pub fn last_query_value(query: Option<&str>, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .filter(|(name, _)| name == key)
        .last()
        .map(|(_, value)| value.into_owned())
}
