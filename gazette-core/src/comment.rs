use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gazette_types::{CommentId, NewsId, UserId};

/// A user-submitted remark attached to exactly one news item.
///
/// `created_at` is assigned by the store at insertion and never changes;
/// editing a comment rewrites `text` only, so chronological order is stable
/// across edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier.
    pub id: CommentId,
    /// Owning news item.
    pub news_id: NewsId,
    /// Author identity; consulted only for identity-equality on edits.
    pub author: UserId,
    /// Comment body.
    pub text: String,
    /// Creation timestamp driving chronological order.
    pub created_at: DateTime<Utc>,
}
