//! One ingestion run: authenticate, fetch, clean, score, store, collect.

use crate::config::Config;
use crate::feeds::twitter::RecentSearchFetcher;
use crate::feeds::{PostFetcher, TokenProvider};
use crate::sentiment::ScoredRow;
use crate::store::{RowStore, SqliteStore};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Authenticating,
    Fetching,
    /// Index of the post being processed.
    Processing(usize),
    Done,
    Aborted,
}

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub stored: usize,
    pub failed: usize,
    pub aborted: bool,
    /// Why the run aborted or the batch came back empty.
    pub reason: Option<String>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.aborted {
            write!(
                f,
                "Authentication failed: {}",
                self.reason.as_deref().unwrap_or("unknown error")
            )
        } else if self.stored > 0 {
            write!(f, "Successfully stored {} tweets in the database.", self.stored)
        } else {
            write!(f, "No tweets found or stored.")
        }
    }
}

/// Scored rows in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ScoredRow>,
}

impl ResultTable {
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Up to `size` rows starting at `start`; empty past the end.
    pub fn page(&self, start: usize, size: usize) -> &[ScoredRow] {
        let start = start.min(self.rows.len());
        let end = start.saturating_add(size).min(self.rows.len());
        &self.rows[start..end]
    }
}

/// Keep at most `limit` rows, in arrival order.
pub fn collect(rows: impl IntoIterator<Item = ScoredRow>, limit: usize) -> ResultTable {
    ResultTable {
        rows: rows.into_iter().take(limit).collect(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub table: ResultTable,
}

pub struct Pipeline {
    authenticator: Box<dyn TokenProvider>,
    fetcher: Box<dyn PostFetcher>,
    query: String,
    max_results: u32,
    limit: usize,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(
        authenticator: Box<dyn TokenProvider>,
        fetcher: Box<dyn PostFetcher>,
        query: impl Into<String>,
        max_results: u32,
        limit: usize,
    ) -> Self {
        Self {
            authenticator,
            fetcher,
            query: query.into(),
            max_results,
            limit,
            state: PipelineState::Idle,
        }
    }

    /// Pipeline against the configured search endpoint.
    pub fn from_config(config: &Config, authenticator: Box<dyn TokenProvider>) -> Self {
        let fetcher = RecentSearchFetcher::new(
            config.api.search_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        );
        Self::new(
            authenticator,
            Box::new(fetcher),
            config.search.query.clone(),
            config.search.max_results,
            config.storage.max_rows,
        )
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn transition(&mut self, state: PipelineState) {
        debug!(from = ?self.state, to = ?state, "pipeline state");
        self.state = state;
    }

    /// Run once against `store`. Only authentication failures abort; a failed
    /// search yields an empty batch and a failed write loses only that row.
    pub async fn run(&mut self, store: &mut dyn RowStore) -> RunOutcome {
        let mut summary = RunSummary::default();
        self.transition(PipelineState::Authenticating);

        let token = match self.authenticator.obtain_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!("authentication failed: {}", e);
                summary.aborted = true;
                summary.reason = Some(e.to_string());
                self.transition(PipelineState::Aborted);
                return RunOutcome {
                    summary,
                    table: ResultTable::default(),
                };
            }
        };

        self.transition(PipelineState::Fetching);
        let posts = match self
            .fetcher
            .search(&token, &self.query, self.max_results)
            .await
        {
            Ok(posts) => posts,
            Err(e) => {
                warn!("search failed, continuing with an empty batch: {}", e);
                summary.reason = Some(e.to_string());
                Vec::new()
            }
        };

        let mut rows = Vec::with_capacity(posts.len().min(self.limit));
        for (index, post) in posts.into_iter().take(self.limit).enumerate() {
            self.transition(PipelineState::Processing(index));

            let row = ScoredRow::from_raw(&post.text);
            match store.append(&row).await {
                Ok(()) => summary.stored += 1,
                Err(e) => {
                    warn!("failed to store tweet {}: {}", post.id, e);
                    summary.failed += 1;
                }
            }
            summary.processed += 1;
            rows.push(row);
        }

        self.transition(PipelineState::Done);
        info!(
            processed = summary.processed,
            stored = summary.stored,
            failed = summary.failed,
            "run finished"
        );

        RunOutcome {
            table: collect(rows, self.limit),
            summary,
        }
    }

    /// Open the database, run once, and close the connection whatever the outcome.
    pub async fn run_with_database(&mut self, database: &Path) -> Result<RunOutcome> {
        let mut store = SqliteStore::open(database)
            .await
            .with_context(|| format!("failed to open database {}", database.display()))?;

        let outcome = self.run(&mut store).await;
        store.close().await;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthError, FetchError, StoreError};
    use crate::feeds::AccessToken;
    use crate::twitter_message::RawPost;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeAuth {
        fail: bool,
    }

    #[async_trait]
    impl TokenProvider for FakeAuth {
        async fn obtain_token(&self) -> Result<AccessToken, AuthError> {
            if self.fail {
                Err(AuthError::MissingCredentials)
            } else {
                Ok(AccessToken::new("token"))
            }
        }
    }

    struct FakeFetcher {
        posts: Option<Vec<RawPost>>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeFetcher {
        fn returning(posts: Vec<RawPost>) -> Self {
            Self {
                posts: Some(posts),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                posts: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl PostFetcher for FakeFetcher {
        async fn search(
            &self,
            _token: &AccessToken,
            _query: &str,
            max_results: u32,
        ) -> Result<Vec<RawPost>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.posts {
                Some(posts) => Ok(posts.iter().take(max_results as usize).cloned().collect()),
                None => Err(FetchError::Status {
                    status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                    detail: "over capacity".to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct FakeStore {
        rows: Vec<ScoredRow>,
        fail_at: Option<usize>,
        attempts: usize,
    }

    #[async_trait]
    impl RowStore for FakeStore {
        async fn append(&mut self, row: &ScoredRow) -> Result<(), StoreError> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_at == Some(attempt) {
                return Err(StoreError::Io(std::io::Error::other("disk full")));
            }
            self.rows.push(row.clone());
            Ok(())
        }
    }

    fn posts(count: usize) -> Vec<RawPost> {
        (0..count)
            .map(|i| RawPost {
                id: i.to_string(),
                text: format!("post {} is great! #tag @user", i),
            })
            .collect()
    }

    fn pipeline(fail_auth: bool, fetcher: FakeFetcher, max_results: u32, limit: usize) -> Pipeline {
        Pipeline::new(
            Box::new(FakeAuth { fail: fail_auth }),
            Box::new(fetcher),
            "football",
            max_results,
            limit,
        )
    }

    #[tokio::test]
    async fn test_auth_failure_aborts_before_fetch() {
        let fetcher = FakeFetcher::returning(posts(3));
        let calls = fetcher.calls.clone();
        let mut pipeline = pipeline(true, fetcher, 10, 100);
        let mut store = FakeStore::default();

        let outcome = pipeline.run(&mut store).await;

        assert!(outcome.summary.aborted);
        assert_eq!(outcome.summary.processed, 0);
        assert!(outcome.table.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(pipeline.state(), PipelineState::Aborted);
        assert!(outcome
            .summary
            .to_string()
            .starts_with("Authentication failed: "));
    }

    #[tokio::test]
    async fn test_ten_posts_in_fetch_order() {
        let mut pipeline = pipeline(false, FakeFetcher::returning(posts(10)), 10, 100);
        let mut store = FakeStore::default();

        let outcome = pipeline.run(&mut store).await;

        assert_eq!(outcome.table.len(), 10);
        assert_eq!(outcome.summary.stored, 10);
        assert_eq!(outcome.table.rows()[0].text, "post 0 is great");
        assert_eq!(outcome.table.rows()[9].text, "post 9 is great");
        assert_eq!(store.rows, outcome.table.rows());
        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(
            outcome.summary.to_string(),
            "Successfully stored 10 tweets in the database."
        );
    }

    #[tokio::test]
    async fn test_stored_is_min_of_requested_and_fetched() {
        let mut store = FakeStore::default();
        let outcome = pipeline(false, FakeFetcher::returning(posts(20)), 5, 100)
            .run(&mut store)
            .await;
        assert_eq!(outcome.summary.stored, 5);

        let mut store = FakeStore::default();
        let outcome = pipeline(false, FakeFetcher::returning(posts(3)), 10, 100)
            .run(&mut store)
            .await;
        assert_eq!(outcome.summary.stored, 3);
        assert_eq!(outcome.summary.failed, 0);
    }

    #[tokio::test]
    async fn test_single_store_failure_loses_one_row() {
        let mut store = FakeStore {
            fail_at: Some(2),
            ..FakeStore::default()
        };
        let outcome = pipeline(false, FakeFetcher::returning(posts(6)), 10, 100)
            .run(&mut store)
            .await;

        assert_eq!(outcome.summary.processed, 6);
        assert_eq!(outcome.summary.stored, 5);
        assert_eq!(outcome.summary.failed, 1);
        assert!(!outcome.summary.aborted);
        assert_eq!(store.rows.len(), 5);
        // The table still shows every scored row
        assert_eq!(outcome.table.len(), 6);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_empty_batch() {
        let mut store = FakeStore::default();
        let mut pipeline = pipeline(false, FakeFetcher::failing(), 10, 100);
        let outcome = pipeline.run(&mut store).await;

        assert!(!outcome.summary.aborted);
        assert_eq!(outcome.summary.processed, 0);
        assert!(outcome.summary.reason.is_some());
        assert!(outcome.table.is_empty());
        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(outcome.summary.to_string(), "No tweets found or stored.");
    }

    #[tokio::test]
    async fn test_empty_fetch() {
        let mut store = FakeStore::default();
        let outcome = pipeline(false, FakeFetcher::returning(Vec::new()), 10, 100)
            .run(&mut store)
            .await;
        assert_eq!(outcome.summary, RunSummary::default());
        assert_eq!(outcome.summary.to_string(), "No tweets found or stored.");
    }

    #[tokio::test]
    async fn test_processing_stops_at_limit() {
        let mut store = FakeStore::default();
        let outcome = pipeline(false, FakeFetcher::returning(posts(50)), 50, 4)
            .run(&mut store)
            .await;
        assert_eq!(outcome.summary.processed, 4);
        assert_eq!(store.attempts, 4);
        assert_eq!(outcome.table.len(), 4);
    }

    #[tokio::test]
    async fn test_posts_empty_after_cleaning_are_kept() {
        let fetcher = FakeFetcher::returning(vec![RawPost {
            id: "1".to_string(),
            text: "@a #b https://t.co/c".to_string(),
        }]);
        let mut store = FakeStore::default();
        let outcome = pipeline(false, fetcher, 10, 100).run(&mut store).await;

        assert_eq!(outcome.summary.stored, 1);
        assert_eq!(outcome.table.rows()[0].text, "");
        assert_eq!(outcome.table.rows()[0].polarity, 0.0);
    }

    #[tokio::test]
    async fn test_run_against_sqlite() {
        let mut store = SqliteStore::open_in_memory().await.unwrap();
        let outcome = pipeline(false, FakeFetcher::returning(posts(10)), 10, 100)
            .run(&mut store)
            .await;

        let stored = store.load_all().await.unwrap();
        assert_eq!(stored, outcome.table.rows());
        store.close().await;
    }

    #[tokio::test]
    async fn test_run_with_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweets.db");

        let outcome = pipeline(false, FakeFetcher::returning(posts(2)), 10, 100)
            .run_with_database(&path)
            .await
            .unwrap();
        assert_eq!(outcome.summary.stored, 2);

        let store = SqliteStore::open(&path).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
        store.close().await;
    }

    #[test]
    fn test_collect_keeps_order_and_limit() {
        let rows: Vec<ScoredRow> = ["a", "b", "c"]
            .iter()
            .map(|t| ScoredRow::from_raw(t))
            .collect();
        let table = collect(rows.clone(), 2);
        assert_eq!(table.rows(), &rows[..2]);
        assert_eq!(collect(rows, 10).len(), 3);
    }

    #[test]
    fn test_table_page_bounds() {
        let table = collect((0..5).map(|i| ScoredRow::from_raw(&i.to_string())), 10);
        assert_eq!(table.page(0, 2).len(), 2);
        assert_eq!(table.page(4, 10).len(), 1);
        assert!(table.page(9, 3).is_empty());
    }
}
