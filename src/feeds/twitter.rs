use super::{AccessToken, PostFetcher};
use crate::error::FetchError;
use crate::twitter_message::RawPost;
use crate::twitter_parser::{parse_error_detail, parse_search_results};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// The recent-search endpoint rejects `max_results` below this value.
const API_MIN_RESULTS: u32 = 10;
const API_MAX_RESULTS: u32 = 100;

pub struct RecentSearchFetcher {
    search_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl RecentSearchFetcher {
    pub fn new(search_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("tweetpulse/0.1")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            search_url,
            timeout,
            client,
        }
    }
}

/// Value sent to the API for a caller-side limit in `1..=100`.
fn requested_page_size(max_results: u32) -> u32 {
    max_results.clamp(API_MIN_RESULTS, API_MAX_RESULTS)
}

#[async_trait]
impl PostFetcher for RecentSearchFetcher {
    async fn search(
        &self,
        token: &AccessToken,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<RawPost>, FetchError> {
        if !(1..=API_MAX_RESULTS).contains(&max_results) {
            return Err(FetchError::InvalidMaxResults(max_results));
        }

        let page_size = requested_page_size(max_results).to_string();
        debug!(query, max_results, "searching recent tweets");

        let response = self
            .client
            .get(&self.search_url)
            .timeout(self.timeout)
            .bearer_auth(token.as_str())
            .query(&[("query", query), ("max_results", page_size.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                detail: parse_error_detail(&body),
            });
        }

        let posts = parse_search_results(&body, max_results as usize)?;
        info!(count = posts.len(), query, "fetched tweets");
        Ok(posts)
    }
}
