//! SQLite-backed Gazette content store.
//!
//! Queries are small and synchronous; the connection sits behind a mutex
//! that is never held across an await point. Multi-step writes run inside a
//! transaction.
#![warn(missing_docs)]

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use gazette_core::store::{CommentReader, CommentWriter, ContentStore, NewsReader};
use gazette_core::{Comment, GazetteError, NewsItem};
use gazette_types::{CommentId, NewsId, UserId};

const SCHEMA_SQL: &str = include_str!("../schema.sql");
const STORE_NAME: &str = "gazette-sqlite";

fn db_err(e: rusqlite::Error) -> GazetteError {
    GazetteError::store(STORE_NAME, e.to_string())
}

fn data_err(msg: impl Into<String>) -> GazetteError {
    GazetteError::store(STORE_NAME, msg)
}

// Fixed-width fractional seconds keep lexicographic text order equal to
// chronological order, and full nanosecond precision survives a round-trip.
fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, GazetteError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| data_err(format!("bad timestamp {raw:?}: {e}")))
}

fn decode_date(raw: &str) -> Result<NaiveDate, GazetteError> {
    raw.parse::<NaiveDate>()
        .map_err(|e| data_err(format!("bad date {raw:?}: {e}")))
}

type NewsRow = (i64, String, String, String);
type CommentRow = (i64, i64, i64, String, String);

fn news_from_row(row: NewsRow) -> Result<NewsItem, GazetteError> {
    let (id, title, body, published_on) = row;
    Ok(NewsItem {
        id: NewsId::new(id),
        title,
        body,
        published_on: decode_date(&published_on)?,
    })
}

fn comment_from_row(row: CommentRow) -> Result<Comment, GazetteError> {
    let (id, news_id, author_id, text, created_at) = row;
    Ok(Comment {
        id: CommentId::new(id),
        news_id: NewsId::new(news_id),
        author: UserId::new(author_id),
        text,
        created_at: decode_timestamp(&created_at)?,
    })
}

/// Content store persisted in a SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database at `path` and apply the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GazetteError> {
        let conn = Connection::open(path).map_err(db_err)?;
        Self::init(conn)
    }

    /// Open a private in-memory database, mainly for tests and demos.
    pub fn open_in_memory() -> Result<Self, GazetteError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, GazetteError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;").map_err(db_err)?;
        conn.execute_batch(SCHEMA_SQL).map_err(db_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, GazetteError> {
        self.conn
            .lock()
            .map_err(|_| data_err("connection mutex poisoned"))
    }

    /// Insert a news item. This is the administrative authoring surface and
    /// deliberately not part of the `ContentStore` contract: the listing and
    /// detail services treat news as immutable.
    pub fn insert_news(
        &self,
        title: &str,
        body: &str,
        published_on: NaiveDate,
    ) -> Result<NewsId, GazetteError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO news (title, body, published_on) VALUES (?, ?, ?)",
            params![title, body, published_on.to_string()],
        )
        .map_err(db_err)?;
        Ok(NewsId::new(conn.last_insert_rowid()))
    }

    /// Insert a comment with an explicit creation timestamp. Backfill/test
    /// surface; the `ContentStore` write path stamps comments itself.
    pub fn insert_comment_at(
        &self,
        news: NewsId,
        author: UserId,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<CommentId, GazetteError> {
        let mut conn = self.lock()?;
        let id = insert_comment_tx(&mut conn, news, author, text, created_at)?;
        Ok(id)
    }
}

fn insert_comment_tx(
    conn: &mut Connection,
    news: NewsId,
    author: UserId,
    text: &str,
    created_at: DateTime<Utc>,
) -> Result<CommentId, GazetteError> {
    let tx = conn.transaction().map_err(db_err)?;
    let news_exists: bool = tx
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM news WHERE id = ?)",
            [news.get()],
            |row| row.get(0),
        )
        .map_err(db_err)?;
    if !news_exists {
        return Err(GazetteError::not_found(format!("news item {news}")));
    }
    tx.execute(
        "INSERT INTO comments (news_id, author_id, text, created_at) VALUES (?, ?, ?, ?)",
        params![
            news.get(),
            author.get(),
            text,
            encode_timestamp(created_at)
        ],
    )
    .map_err(db_err)?;
    let id = CommentId::new(tx.last_insert_rowid());
    tx.commit().map_err(db_err)?;
    Ok(id)
}

impl ContentStore for SqliteStore {
    fn name(&self) -> &'static str {
        STORE_NAME
    }

    fn as_news_reader(&self) -> Option<&dyn NewsReader> {
        Some(self as &dyn NewsReader)
    }

    fn as_comment_reader(&self) -> Option<&dyn CommentReader> {
        Some(self as &dyn CommentReader)
    }

    fn as_comment_writer(&self) -> Option<&dyn CommentWriter> {
        Some(self as &dyn CommentWriter)
    }
}

#[async_trait]
impl NewsReader for SqliteStore {
    async fn recent_news(&self, limit: usize) -> Result<Vec<NewsItem>, GazetteError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, title, body, published_on FROM news \
                 ORDER BY published_on DESC, id DESC LIMIT ?",
            )
            .map_err(db_err)?;
        let rows = stmt
            .query_map([limit as i64], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .map_err(db_err)?
            .collect::<Result<Vec<NewsRow>, _>>()
            .map_err(db_err)?;
        rows.into_iter().map(news_from_row).collect()
    }

    async fn news_item(&self, id: NewsId) -> Result<NewsItem, GazetteError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, title, body, published_on FROM news WHERE id = ?",
                [id.get()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()
            .map_err(db_err)?;
        match row {
            Some(row) => news_from_row(row),
            None => Err(GazetteError::not_found(format!("news item {id}"))),
        }
    }
}

#[async_trait]
impl CommentReader for SqliteStore {
    async fn comments_for(&self, news: NewsId) -> Result<Vec<Comment>, GazetteError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, news_id, author_id, text, created_at FROM comments \
                 WHERE news_id = ? ORDER BY created_at ASC, id ASC",
            )
            .map_err(db_err)?;
        let rows = stmt
            .query_map([news.get()], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            })
            .map_err(db_err)?
            .collect::<Result<Vec<CommentRow>, _>>()
            .map_err(db_err)?;
        rows.into_iter().map(comment_from_row).collect()
    }

    async fn comment(&self, id: CommentId) -> Result<Comment, GazetteError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, news_id, author_id, text, created_at FROM comments WHERE id = ?",
                [id.get()],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                    ))
                },
            )
            .optional()
            .map_err(db_err)?;
        match row {
            Some(row) => comment_from_row(row),
            None => Err(GazetteError::not_found(format!("comment {id}"))),
        }
    }
}

#[async_trait]
impl CommentWriter for SqliteStore {
    async fn insert_comment(
        &self,
        news: NewsId,
        author: UserId,
        text: &str,
    ) -> Result<Comment, GazetteError> {
        let created_at = Utc::now();
        let id = {
            let mut conn = self.lock()?;
            insert_comment_tx(&mut conn, news, author, text, created_at)?
        };
        Ok(Comment {
            id,
            news_id: news,
            author,
            text: text.to_string(),
            created_at,
        })
    }

    async fn update_comment(&self, id: CommentId, text: &str) -> Result<Comment, GazetteError> {
        let conn = self.lock()?;
        let changed = conn
            .execute(
                "UPDATE comments SET text = ? WHERE id = ?",
                params![text, id.get()],
            )
            .map_err(db_err)?;
        if changed == 0 {
            return Err(GazetteError::not_found(format!("comment {id}")));
        }
        let row = conn
            .query_row(
                "SELECT id, news_id, author_id, text, created_at FROM comments WHERE id = ?",
                [id.get()],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                    ))
                },
            )
            .map_err(db_err)?;
        comment_from_row(row)
    }

    async fn remove_comment(&self, id: CommentId) -> Result<(), GazetteError> {
        let conn = self.lock()?;
        let changed = conn
            .execute("DELETE FROM comments WHERE id = ?", [id.get()])
            .map_err(db_err)?;
        if changed == 0 {
            return Err(GazetteError::not_found(format!("comment {id}")));
        }
        Ok(())
    }
}
