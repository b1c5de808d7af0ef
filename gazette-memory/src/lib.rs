//! In-memory Gazette content store.
//!
//! `MemoryStore` keeps news items and comments in maps behind a
//! `tokio::sync::RwLock` and re-derives ordering on every read, so it serves
//! as both the reference implementation of the store contracts and a CI-safe
//! backend for tests and demos.
#![warn(missing_docs)]

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use gazette_core::store::{CommentReader, CommentWriter, ContentStore, NewsReader};
use gazette_core::{Comment, GazetteError, NewsItem};
use gazette_types::{CommentId, NewsId, UserId};

#[derive(Default)]
struct State {
    news: BTreeMap<i64, NewsItem>,
    comments: BTreeMap<i64, Comment>,
    next_news_id: i64,
    next_comment_id: i64,
}

impl State {
    fn alloc_news_id(&mut self) -> NewsId {
        self.next_news_id += 1;
        NewsId::new(self.next_news_id)
    }

    fn alloc_comment_id(&mut self) -> CommentId {
        self.next_comment_id += 1;
        CommentId::new(self.next_comment_id)
    }
}

/// In-memory content store with deterministic ordering.
pub struct MemoryStore {
    state: RwLock<State>,
    writable: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty, writable store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
            writable: true,
        }
    }

    /// Convert this store into a read-only replica: it keeps its data but no
    /// longer advertises the comment-write capability.
    #[must_use]
    pub fn into_read_only(self) -> Self {
        Self {
            writable: false,
            ..self
        }
    }

    /// Seed a news item, allocating the next id. Returns the assigned id.
    ///
    /// Seeding stands in for the administrative authoring interface; it is
    /// deliberately not part of the `ContentStore` surface.
    pub async fn seed_news(&self, title: &str, body: &str, published_on: NaiveDate) -> NewsId {
        let mut state = self.state.write().await;
        let id = state.alloc_news_id();
        state.news.insert(
            id.get(),
            NewsItem {
                id,
                title: title.to_string(),
                body: body.to_string(),
                published_on,
            },
        );
        id
    }

    /// Seed a comment with an explicit creation timestamp, allocating the
    /// next id. Lets tests fabricate comment histories out of wall-clock
    /// order.
    pub async fn seed_comment(
        &self,
        news: NewsId,
        author: UserId,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> CommentId {
        let mut state = self.state.write().await;
        let id = state.alloc_comment_id();
        state.comments.insert(
            id.get(),
            Comment {
                id,
                news_id: news,
                author,
                text: text.to_string(),
                created_at,
            },
        );
        id
    }
}

impl ContentStore for MemoryStore {
    fn name(&self) -> &'static str {
        "gazette-memory"
    }

    fn as_news_reader(&self) -> Option<&dyn NewsReader> {
        Some(self as &dyn NewsReader)
    }

    fn as_comment_reader(&self) -> Option<&dyn CommentReader> {
        Some(self as &dyn CommentReader)
    }

    fn as_comment_writer(&self) -> Option<&dyn CommentWriter> {
        if self.writable {
            Some(self as &dyn CommentWriter)
        } else {
            None
        }
    }
}

#[async_trait]
impl NewsReader for MemoryStore {
    async fn recent_news(&self, limit: usize) -> Result<Vec<NewsItem>, GazetteError> {
        let state = self.state.read().await;
        let mut items: Vec<NewsItem> = state.news.values().cloned().collect();
        items.sort_by(|a, b| {
            b.published_on
                .cmp(&a.published_on)
                .then_with(|| b.id.cmp(&a.id))
        });
        items.truncate(limit);
        Ok(items)
    }

    async fn news_item(&self, id: NewsId) -> Result<NewsItem, GazetteError> {
        let state = self.state.read().await;
        state
            .news
            .get(&id.get())
            .cloned()
            .ok_or_else(|| GazetteError::not_found(format!("news item {id}")))
    }
}

#[async_trait]
impl CommentReader for MemoryStore {
    async fn comments_for(&self, news: NewsId) -> Result<Vec<Comment>, GazetteError> {
        let state = self.state.read().await;
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| c.news_id == news)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn comment(&self, id: CommentId) -> Result<Comment, GazetteError> {
        let state = self.state.read().await;
        state
            .comments
            .get(&id.get())
            .cloned()
            .ok_or_else(|| GazetteError::not_found(format!("comment {id}")))
    }
}

#[async_trait]
impl CommentWriter for MemoryStore {
    async fn insert_comment(
        &self,
        news: NewsId,
        author: UserId,
        text: &str,
    ) -> Result<Comment, GazetteError> {
        let mut state = self.state.write().await;
        if !state.news.contains_key(&news.get()) {
            return Err(GazetteError::not_found(format!("news item {news}")));
        }
        let id = state.alloc_comment_id();
        let comment = Comment {
            id,
            news_id: news,
            author,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        state.comments.insert(id.get(), comment.clone());
        Ok(comment)
    }

    async fn update_comment(&self, id: CommentId, text: &str) -> Result<Comment, GazetteError> {
        let mut state = self.state.write().await;
        let comment = state
            .comments
            .get_mut(&id.get())
            .ok_or_else(|| GazetteError::not_found(format!("comment {id}")))?;
        comment.text = text.to_string();
        Ok(comment.clone())
    }

    async fn remove_comment(&self, id: CommentId) -> Result<(), GazetteError> {
        let mut state = self.state.write().await;
        state
            .comments
            .remove(&id.get())
            .map(|_| ())
            .ok_or_else(|| GazetteError::not_found(format!("comment {id}")))
    }
}
