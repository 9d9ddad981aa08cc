use crate::twitter_message::{ApiErrorBody, RawPost, SearchResponse, TokenResponse};
use tracing::debug;

/// Parse a recent-search response body into posts, keeping at most `limit`.
/// Expected format:
/// {"data": [{"id": "1", "text": "..."}], "meta": {"result_count": 1}}
///
/// A body without `data` is a valid empty result; items without `text` become empty posts.
pub fn parse_search_results(body: &str, limit: usize) -> Result<Vec<RawPost>, serde_json::Error> {
    let response: SearchResponse = serde_json::from_str(body)?;

    if let Some(meta) = &response.meta {
        debug!(result_count = meta.result_count, "search response metadata");
    }

    Ok(response
        .data
        .into_iter()
        .take(limit)
        .map(|item| RawPost {
            id: item.id,
            text: item.text,
        })
        .collect())
}

/// Extract a non-empty `access_token` from a token exchange response.
pub fn parse_access_token(body: &str) -> Option<String> {
    let response: TokenResponse = serde_json::from_str(body).ok()?;
    response
        .access_token
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Best-effort human readable message from an API error body.
pub fn parse_error_detail(body: &str) -> String {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();

    if let Some(detail) = parsed.detail.or(parsed.title) {
        return detail;
    }

    let messages: Vec<String> = parsed
        .errors
        .into_iter()
        .filter_map(|error| error.message)
        .collect();
    if !messages.is_empty() {
        return messages.join("; ");
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
