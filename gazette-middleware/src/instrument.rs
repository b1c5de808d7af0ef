use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use gazette_core::store::{CommentReader, CommentWriter, ContentStore, NewsReader};
use gazette_core::{Comment, GazetteError, Middleware, NewsItem};
use gazette_types::{Capability, CommentId, NewsId, UserId};

/// Middleware that emits a `tracing` event for every store call.
///
/// Results pass through unchanged; failures are logged at `warn` with the
/// store name and capability label so operators can attribute them.
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn ContentStore>) -> Arc<dyn ContentStore> {
        Arc::new(InstrumentedStore { inner })
    }

    fn name(&self) -> &'static str {
        "tracing"
    }

    fn config_json(&self) -> serde_json::Value {
        json!({})
    }
}

struct InstrumentedStore {
    inner: Arc<dyn ContentStore>,
}

impl InstrumentedStore {
    fn observe<T>(&self, capability: Capability, result: &Result<T, GazetteError>) {
        match result {
            Ok(_) => debug!(store = self.inner.name(), %capability, "store call"),
            Err(err) => warn!(
                store = self.inner.name(),
                %capability,
                error = %err,
                "store call failed"
            ),
        }
    }
}

impl ContentStore for InstrumentedStore {
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
impl NewsReader for InstrumentedStore {
    async fn recent_news(&self, limit: usize) -> Result<Vec<NewsItem>, GazetteError> {
        let reader = self
            .inner
            .as_news_reader()
            .ok_or_else(|| GazetteError::unsupported(Capability::RecentNews.as_str()))?;
        let result = reader.recent_news(limit).await;
        self.observe(Capability::RecentNews, &result);
        result
    }

    async fn news_item(&self, id: NewsId) -> Result<NewsItem, GazetteError> {
        let reader = self
            .inner
            .as_news_reader()
            .ok_or_else(|| GazetteError::unsupported(Capability::NewsItem.as_str()))?;
        let result = reader.news_item(id).await;
        self.observe(Capability::NewsItem, &result);
        result
    }
}

#[async_trait]
impl CommentReader for InstrumentedStore {
    async fn comments_for(&self, news: NewsId) -> Result<Vec<Comment>, GazetteError> {
        let reader = self
            .inner
            .as_comment_reader()
            .ok_or_else(|| GazetteError::unsupported(Capability::Comments.as_str()))?;
        let result = reader.comments_for(news).await;
        self.observe(Capability::Comments, &result);
        result
    }

    async fn comment(&self, id: CommentId) -> Result<Comment, GazetteError> {
        let reader = self
            .inner
            .as_comment_reader()
            .ok_or_else(|| GazetteError::unsupported(Capability::Comment.as_str()))?;
        let result = reader.comment(id).await;
        self.observe(Capability::Comment, &result);
        result
    }
}

#[async_trait]
impl CommentWriter for InstrumentedStore {
    async fn insert_comment(
        &self,
        news: NewsId,
        author: UserId,
        text: &str,
    ) -> Result<Comment, GazetteError> {
        let writer = self
            .inner
            .as_comment_writer()
            .ok_or_else(|| GazetteError::unsupported(Capability::SubmitComment.as_str()))?;
        let result = writer.insert_comment(news, author, text).await;
        self.observe(Capability::SubmitComment, &result);
        result
    }

    async fn update_comment(&self, id: CommentId, text: &str) -> Result<Comment, GazetteError> {
        let writer = self
            .inner
            .as_comment_writer()
            .ok_or_else(|| GazetteError::unsupported(Capability::EditComment.as_str()))?;
        let result = writer.update_comment(id, text).await;
        self.observe(Capability::EditComment, &result);
        result
    }

    async fn remove_comment(&self, id: CommentId) -> Result<(), GazetteError> {
        let writer = self
            .inner
            .as_comment_writer()
            .ok_or_else(|| GazetteError::unsupported(Capability::DeleteComment.as_str()))?;
        let result = writer.remove_comment(id).await;
        self.observe(Capability::DeleteComment, &result);
        result
    }
}
