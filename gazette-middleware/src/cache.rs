use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use serde_json::json;

use gazette_core::store::{CommentReader, CommentWriter, ContentStore, NewsReader};
use gazette_core::{Comment, GazetteError, Middleware, NewsItem};
use gazette_types::{CacheConfig, Capability, CommentId, NewsId, UserId};

/// Cache discrimination key, one variant per cached read shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    RecentNews(usize),
    NewsItem(i64),
    Comments(i64),
}

#[derive(Clone)]
enum CacheValue {
    News(Vec<NewsItem>),
    Item(NewsItem),
    Comments(Vec<Comment>),
}

/// Middleware that wraps a store with a read-through cache.
///
/// Cached reads: `recent_news`, `news_item`, `comments_for`. Single-comment
/// lookups stay uncached; they only feed the write path, which must see
/// current data. Errors are never cached.
///
/// Every comment write invalidates the cached comment list of the affected
/// news item before returning, so subsequent ordered reads observe the write.
/// News items are created administratively outside this store surface, so
/// listing staleness is bounded by the TTL alone.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Create the middleware from a cache configuration.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl Default for CacheMiddleware {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn ContentStore>) -> Arc<dyn ContentStore> {
        Arc::new(CachedStore {
            cache: Cache::builder()
                .max_capacity(self.cfg.capacity)
                .time_to_live(self.cfg.ttl)
                .build(),
            inner,
        })
    }

    fn name(&self) -> &'static str {
        "cache"
    }

    fn config_json(&self) -> serde_json::Value {
        json!({
            "capacity": self.cfg.capacity,
            "ttl_ms": self.cfg.ttl.as_millis() as u64,
        })
    }
}

struct CachedStore {
    inner: Arc<dyn ContentStore>,
    cache: Cache<CacheKey, CacheValue>,
}

impl CachedStore {
    fn news_reader(&self) -> Result<&dyn NewsReader, GazetteError> {
        self.inner
            .as_news_reader()
            .ok_or_else(|| GazetteError::unsupported(Capability::RecentNews.as_str()))
    }

    fn comment_reader(&self) -> Result<&dyn CommentReader, GazetteError> {
        self.inner
            .as_comment_reader()
            .ok_or_else(|| GazetteError::unsupported(Capability::Comments.as_str()))
    }

    fn comment_writer(&self) -> Result<&dyn CommentWriter, GazetteError> {
        self.inner
            .as_comment_writer()
            .ok_or_else(|| GazetteError::unsupported(Capability::SubmitComment.as_str()))
    }

    async fn invalidate_comments(&self, news: NewsId) {
        self.cache.invalidate(&CacheKey::Comments(news.get())).await;
    }
}

impl ContentStore for CachedStore {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn as_news_reader(&self) -> Option<&dyn NewsReader> {
        if self.inner.as_news_reader().is_some() {
            Some(self as &dyn NewsReader)
        } else {
            None
        }
    }

    fn as_comment_reader(&self) -> Option<&dyn CommentReader> {
        if self.inner.as_comment_reader().is_some() {
            Some(self as &dyn CommentReader)
        } else {
            None
        }
    }

    fn as_comment_writer(&self) -> Option<&dyn CommentWriter> {
        if self.inner.as_comment_writer().is_some() {
            Some(self as &dyn CommentWriter)
        } else {
            None
        }
    }
}

#[async_trait]
impl NewsReader for CachedStore {
    async fn recent_news(&self, limit: usize) -> Result<Vec<NewsItem>, GazetteError> {
        let key = CacheKey::RecentNews(limit);
        if let Some(CacheValue::News(items)) = self.cache.get(&key).await {
            return Ok(items);
        }
        let items = self.news_reader()?.recent_news(limit).await?;
        self.cache.insert(key, CacheValue::News(items.clone())).await;
        Ok(items)
    }

    async fn news_item(&self, id: NewsId) -> Result<NewsItem, GazetteError> {
        let key = CacheKey::NewsItem(id.get());
        if let Some(CacheValue::Item(item)) = self.cache.get(&key).await {
            return Ok(item);
        }
        let item = self.news_reader()?.news_item(id).await?;
        self.cache.insert(key, CacheValue::Item(item.clone())).await;
        Ok(item)
    }
}

#[async_trait]
impl CommentReader for CachedStore {
    async fn comments_for(&self, news: NewsId) -> Result<Vec<Comment>, GazetteError> {
        let key = CacheKey::Comments(news.get());
        if let Some(CacheValue::Comments(comments)) = self.cache.get(&key).await {
            return Ok(comments);
        }
        let comments = self.comment_reader()?.comments_for(news).await?;
        self.cache
            .insert(key, CacheValue::Comments(comments.clone()))
            .await;
        Ok(comments)
    }

    async fn comment(&self, id: CommentId) -> Result<Comment, GazetteError> {
        self.comment_reader()?.comment(id).await
    }
}

#[async_trait]
impl CommentWriter for CachedStore {
    async fn insert_comment(
        &self,
        news: NewsId,
        author: UserId,
        text: &str,
    ) -> Result<Comment, GazetteError> {
        let comment = self.comment_writer()?.insert_comment(news, author, text).await?;
        self.invalidate_comments(news).await;
        Ok(comment)
    }

    async fn update_comment(&self, id: CommentId, text: &str) -> Result<Comment, GazetteError> {
        let comment = self.comment_writer()?.update_comment(id, text).await?;
        self.invalidate_comments(comment.news_id).await;
        Ok(comment)
    }

    async fn remove_comment(&self, id: CommentId) -> Result<(), GazetteError> {
        // Learn the owning news item before the row disappears; fall back to
        // a full invalidation when the inner store cannot be asked.
        let owner = match self.inner.as_comment_reader() {
            Some(reader) => reader.comment(id).await.ok().map(|c| c.news_id),
            None => None,
        };
        self.comment_writer()?.remove_comment(id).await?;
        match owner {
            Some(news) => self.invalidate_comments(news).await,
            None => self.cache.invalidate_all(),
        }
        Ok(())
    }
}
