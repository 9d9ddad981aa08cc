//! SQLite persistence for scored posts.

use crate::error::StoreError;
use crate::sentiment::ScoredRow;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS tweets (
    Text TEXT,
    Sentiment REAL,
    Sentiment_Magnitude REAL,
    Sentiment_VADER REAL
)";

const INSERT_ROW: &str =
    "INSERT INTO tweets (Text, Sentiment, Sentiment_Magnitude, Sentiment_VADER) VALUES (?, ?, ?, ?)";

const SELECT_ROWS: &str =
    "SELECT Text, Sentiment, Sentiment_Magnitude, Sentiment_VADER FROM tweets ORDER BY rowid";

/// Anything a pipeline run can append scored rows to.
#[async_trait]
pub trait RowStore: Send {
    /// Persist one row. Rows appear in storage in the order they are appended.
    async fn append(&mut self, row: &ScoredRow) -> Result<(), StoreError>;
}

/// `tweets` table in a SQLite file, accessed through a single connection.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the table exists.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::connect(path, true).await
    }

    /// Open a database that must already exist. Never creates the file.
    pub async fn open_existing(path: &Path) -> Result<Self, StoreError> {
        if !path.is_file() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("database {} does not exist", path.display()),
            )));
        }
        Self::connect(path, false).await
    }

    async fn connect(path: &Path, create: bool) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(create);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        info!("Opened database: {}", path.display());
        Ok(store)
    }

    /// Private database that disappears when the store is closed.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        // One connection that never idles out, or the data would vanish with it
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Every stored row in insertion order.
    pub async fn load_all(&self) -> Result<Vec<ScoredRow>, StoreError> {
        let rows = sqlx::query_as::<_, (Option<String>, Option<f64>, Option<f64>, Option<f64>)>(
            SELECT_ROWS,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(text, polarity, magnitude, vader_compound)| ScoredRow {
                text: text.unwrap_or_default(),
                polarity: polarity.unwrap_or_default(),
                magnitude: magnitude.unwrap_or_default(),
                vader_compound: vader_compound.unwrap_or_default(),
            })
            .collect())
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tweets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Release the connection. Rows already appended stay committed.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RowStore for SqliteStore {
    async fn append(&mut self, row: &ScoredRow) -> Result<(), StoreError> {
        sqlx::query(INSERT_ROW)
            .bind(&row.text)
            .bind(row.polarity)
            .bind(row.magnitude)
            .bind(row.vader_compound)
            .execute(&self.pool)
            .await?;
        debug!("Stored row: {}", row.text);
        Ok(())
    }
}
