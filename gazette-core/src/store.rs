use async_trait::async_trait;

use crate::GazetteError;
use crate::{Comment, NewsItem};
pub use gazette_types::StoreKey;
use gazette_types::{CommentId, NewsId, UserId};

/// Focused role trait for stores that serve the news read path.
#[async_trait]
pub trait NewsReader: Send + Sync {
    /// Fetch at most `limit` news items, most recent publication date first.
    ///
    /// Ordering is enforced by the store's query semantics: publication date
    /// descending, ties broken by id descending so repeated calls over the
    /// same data always agree. Fewer than `limit` stored items returns all of
    /// them; an empty store returns an empty sequence, not an error.
    async fn recent_news(&self, limit: usize) -> Result<Vec<NewsItem>, GazetteError>;

    /// Fetch a single news item by id.
    ///
    /// Fails with [`GazetteError::NotFound`] when the id is unknown; there is
    /// no partial result.
    async fn news_item(&self, id: NewsId) -> Result<NewsItem, GazetteError>;
}

/// Focused role trait for stores that serve the comment read path.
#[async_trait]
pub trait CommentReader: Send + Sync {
    /// Fetch all comments attached to a news item, oldest first.
    ///
    /// Ordering is creation timestamp ascending with ties broken by id
    /// ascending. A news item without comments yields an empty sequence.
    async fn comments_for(&self, news: NewsId) -> Result<Vec<Comment>, GazetteError>;

    /// Fetch a single comment by id, failing with
    /// [`GazetteError::NotFound`] when absent.
    async fn comment(&self, id: CommentId) -> Result<Comment, GazetteError>;
}

/// Focused role trait for stores that accept comment writes.
///
/// Authorization is not this trait's concern: the facade verifies caller
/// identity before any writer method is reached. Writers only perform the
/// mechanics.
#[async_trait]
pub trait CommentWriter: Send + Sync {
    /// Insert a new comment attributed to `author`, timestamped by the store
    /// at insertion. Returns the stored comment including its assigned id.
    async fn insert_comment(
        &self,
        news: NewsId,
        author: UserId,
        text: &str,
    ) -> Result<Comment, GazetteError>;

    /// Replace the text of an existing comment. The creation timestamp is
    /// untouched, so chronological order is stable across edits.
    async fn update_comment(&self, id: CommentId, text: &str) -> Result<Comment, GazetteError>;

    /// Remove a comment. Fails with [`GazetteError::NotFound`] when the id is
    /// unknown.
    async fn remove_comment(&self, id: CommentId) -> Result<(), GazetteError>;
}

/// Main store trait implemented by backend crates. Exposes capability discovery.
pub trait ContentStore: Send + Sync {
    /// A stable identifier for configuration and logs (e.g. "gazette-sqlite").
    fn name(&self) -> &'static str;

    /// Canonical store key constructed from the static name.
    fn key(&self) -> StoreKey {
        StoreKey::new(self.name())
    }

    /// Advertise the news read capability by returning a usable trait object
    /// reference when supported.
    fn as_news_reader(&self) -> Option<&dyn NewsReader> {
        None
    }

    /// Advertise the comment read capability by returning a usable trait
    /// object reference when supported.
    fn as_comment_reader(&self) -> Option<&dyn CommentReader> {
        None
    }

    /// Advertise the comment write capability by returning a usable trait
    /// object reference when supported.
    ///
    /// Read-only stores (e.g. replicas) leave this at the default `None`;
    /// the facade then fails comment writes with
    /// [`GazetteError::Unsupported`] before touching the store.
    fn as_comment_writer(&self) -> Option<&dyn CommentWriter> {
        None
    }
}
