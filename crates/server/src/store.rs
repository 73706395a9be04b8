//! Article persistence.
//!
//! Records live either in process memory (the default, used by tests and
//! local runs) or in a PostgreSQL table holding each record as JSONB.

use std::sync::Arc;

use deadpool_postgres::{Pool, Runtime};
use serde::{Deserialize, Serialize};
use seoscore_core::{ArticleDocument, ScoreReport};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tokio_postgres::NoTls;
use tokio_postgres::types::Json;
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS articles (
    id UUID PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL,
    record JSONB NOT NULL
);
CREATE INDEX IF NOT EXISTS articles_created_at_idx ON articles (created_at DESC);
";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to create connection pool: {0}")]
    CreatePool(#[from] deadpool_postgres::CreatePoolError),

    #[error("Database connection unavailable: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Database query failed: {0}")]
    Query(#[from] tokio_postgres::Error),

    #[error("Stored record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

/// A stored article with its keywords and latest score snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: Uuid,
    #[serde(default)]
    pub topic: String,
    pub primary_keyword: String,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(flatten)]
    pub article: ArticleDocument,
    /// Score computed the last time the article was created or rescored.
    #[serde(default)]
    pub seo_score: Option<ScoreReport>,
}

impl ArticleRecord {
    /// New draft with a fresh id, timestamped now.
    pub fn new(topic: String, primary_keyword: String, secondary_keywords: Vec<String>, article: ArticleDocument) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            topic,
            primary_keyword,
            secondary_keywords,
            status: ArticleStatus::Draft,
            created_at: now,
            updated_at: now,
            article,
            seo_score: None,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc();
    }
}

#[derive(Clone)]
pub enum ArticleStore {
    /// Records in insertion order.
    Memory(Arc<RwLock<Vec<ArticleRecord>>>),
    Postgres(Pool),
}

impl ArticleStore {
    pub fn memory() -> Self {
        Self::Memory(Arc::default())
    }

    /// Connects to PostgreSQL and creates the `articles` table if needed.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let mut config = deadpool_postgres::Config::new();
        config.url = Some(database_url.to_string());
        let pool = config.create_pool(Some(Runtime::Tokio1), NoTls)?;

        let client = pool.get().await?;
        client.batch_execute(SCHEMA).await?;

        Ok(Self::Postgres(pool))
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }

    /// Newest records first.
    pub async fn list(&self, limit: usize) -> Result<Vec<ArticleRecord>, StoreError> {
        match self {
            Self::Memory(records) => Ok(records.read().await.iter().rev().take(limit).cloned().collect()),
            Self::Postgres(pool) => {
                let client = pool.get().await?;
                let rows = client
                    .query(
                        "SELECT record FROM articles ORDER BY created_at DESC LIMIT $1",
                        &[&(limit as i64)],
                    )
                    .await?;
                Ok(rows.iter().map(|row| row.get::<_, Json<ArticleRecord>>(0).0).collect())
            }
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<ArticleRecord>, StoreError> {
        match self {
            Self::Memory(records) => Ok(records.read().await.iter().find(|r| r.id == id).cloned()),
            Self::Postgres(pool) => {
                let client = pool.get().await?;
                let row = client.query_opt("SELECT record FROM articles WHERE id = $1", &[&id]).await?;
                Ok(row.map(|row| row.get::<_, Json<ArticleRecord>>(0).0))
            }
        }
    }

    pub async fn insert(&self, record: &ArticleRecord) -> Result<(), StoreError> {
        match self {
            Self::Memory(records) => {
                records.write().await.push(record.clone());
                Ok(())
            }
            Self::Postgres(pool) => {
                let client = pool.get().await?;
                client
                    .execute(
                        "INSERT INTO articles (id, created_at, record) VALUES ($1, $2, $3)",
                        &[&record.id, &record.created_at, &Json(record)],
                    )
                    .await?;
                Ok(())
            }
        }
    }

    /// Applies `change` to the stored record and returns what it returns, or
    /// `None` when no record has the id.
    ///
    /// The read, the change and the write happen under one lock: the store's
    /// write lock in memory, a `FOR UPDATE` row lock in PostgreSQL. Concurrent
    /// changes to the same article are applied one after another.
    pub async fn modify<T, F>(&self, id: Uuid, change: F) -> Result<Option<T>, StoreError>
    where
        T: Send,
        F: FnOnce(&mut ArticleRecord) -> T + Send,
    {
        match self {
            Self::Memory(records) => {
                let mut records = records.write().await;
                Ok(records.iter_mut().find(|r| r.id == id).map(change))
            }
            Self::Postgres(pool) => {
                let mut client = pool.get().await?;
                let tx = client.transaction().await?;

                let Some(row) = tx.query_opt("SELECT record FROM articles WHERE id = $1 FOR UPDATE", &[&id]).await?
                else {
                    return Ok(None);
                };
                let mut record = row.get::<_, Json<ArticleRecord>>(0).0;
                let output = change(&mut record);

                tx.execute("UPDATE articles SET record = $2 WHERE id = $1", &[&id, &Json(&record)]).await?;
                tx.commit().await?;
                Ok(Some(output))
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        match self {
            Self::Memory(records) => {
                let mut records = records.write().await;
                let before = records.len();
                records.retain(|r| r.id != id);
                Ok(records.len() < before)
            }
            Self::Postgres(pool) => {
                let client = pool.get().await?;
                let deleted = client.execute("DELETE FROM articles WHERE id = $1", &[&id]).await?;
                Ok(deleted > 0)
            }
        }
    }

    /// Latest score snapshot of every stored article, `None` for unscored ones.
    pub async fn scores(&self) -> Result<Vec<Option<ScoreReport>>, StoreError> {
        match self {
            Self::Memory(records) => Ok(records.read().await.iter().map(|r| r.seo_score.clone()).collect()),
            Self::Postgres(pool) => {
                let client = pool.get().await?;
                let rows = client.query("SELECT record -> 'seo_score' FROM articles", &[]).await?;
                rows.iter()
                    .map(|row| -> Result<Option<ScoreReport>, StoreError> {
                        match row.get::<_, Option<serde_json::Value>>(0) {
                            Some(value) => Ok(serde_json::from_value(value)?),
                            None => Ok(None),
                        }
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ArticleRecord {
        let article = ArticleDocument { title: title.to_string(), ..Default::default() };
        ArticleRecord::new("VAT".into(), "VAT".into(), vec![], article)
    }

    #[tokio::test]
    async fn test_memory_list_newest_first() {
        let store = ArticleStore::memory();
        for title in ["pierwszy", "drugi", "trzeci"] {
            store.insert(&record(title)).await.unwrap();
        }

        let titles: Vec<String> = store.list(2).await.unwrap().into_iter().map(|r| r.article.title).collect();
        assert_eq!(titles, vec!["trzeci", "drugi"]);
    }

    #[tokio::test]
    async fn test_memory_update_and_delete() {
        let store = ArticleStore::memory();
        let mut rec = record("VAT");
        store.insert(&rec).await.unwrap();

        let status = store
            .modify(rec.id, |r| {
                r.status = ArticleStatus::Published;
                r.status
            })
            .await
            .unwrap();
        assert_eq!(status, Some(ArticleStatus::Published));
        assert_eq!(store.get(rec.id).await.unwrap().unwrap().status, ArticleStatus::Published);

        assert!(store.delete(rec.id).await.unwrap());
        assert!(!store.delete(rec.id).await.unwrap());
        assert!(store.modify(rec.id, |r| r.topic.clear()).await.unwrap().is_none());
        assert!(store.get(rec.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_modifications_are_not_lost() {
        let store = ArticleStore::memory();
        let rec = record("VAT");
        store.insert(&rec).await.unwrap();
        let id = rec.id;

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.modify(id, move |r| r.secondary_keywords.push(format!("kw{}", i))).await.unwrap()
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.secondary_keywords.len(), 32);
    }

    #[test]
    fn test_record_serializes_flat() {
        let rec = record("Jak rozliczać VAT");
        let value = serde_json::to_value(&rec).unwrap();

        assert_eq!(value["title"], "Jak rozliczać VAT");
        assert_eq!(value["status"], "draft");
        assert!(value["seo_score"].is_null());
        assert!(value["created_at"].as_str().unwrap().contains('T'));

        let back: ArticleRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, rec);
    }
}
