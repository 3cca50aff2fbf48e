use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::debug;

use shared::domain::{ContactMessage, MessageId, StoredContactMessage};

/// Append-only sink for validated contact messages.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert_contact_message(&self, message: &ContactMessage) -> Result<MessageId>;
}

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // Every connection to `:memory:` is a separate database, and it is
        // gone once its connection closes.
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options.connect_with(connect_options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    /// Closes the pool; later queries fail instead of reconnecting.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn count_contact_messages(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await
            .context("failed to count contact messages")?;
        Ok(count)
    }

    /// Newest first.
    pub async fn list_contact_messages(&self, limit: u32) -> Result<Vec<StoredContactMessage>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, message, created_at
            FROM contact_messages
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .context("failed to list contact messages")?;

        rows.into_iter()
            .map(|row| -> Result<StoredContactMessage> {
                Ok(StoredContactMessage {
                    id: MessageId(row.try_get::<i64, _>("id")?),
                    name: row.try_get("name")?,
                    email: row.try_get("email")?,
                    message: row.try_get("message")?,
                    created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ContactStore for Storage {
    async fn insert_contact_message(&self, message: &ContactMessage) -> Result<MessageId> {
        let rec = sqlx::query(
            "INSERT INTO contact_messages (name, email, message, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("failed to insert contact message")?;
        let id = MessageId(rec.get::<i64, _>(0));
        debug!(message_id = id.0, "contact message stored");
        Ok(id)
    }
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url.contains(":memory:") || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
