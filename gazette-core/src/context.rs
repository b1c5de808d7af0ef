use serde::{Deserialize, Serialize};

use gazette_types::{Caller, NewsId, UserId};

use crate::{Comment, NewsItem};

/// Capability descriptor marking that the caller may submit a comment.
///
/// Presence of this value in a [`NewsDetail`] is the read-path authorization
/// signal; the write path re-verifies authentication independently rather
/// than trusting that the descriptor was honestly checked upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    /// News item the form would attach a comment to.
    pub news_id: NewsId,
    /// User the submitted comment would be attributed to.
    pub author: UserId,
}

/// Result context for the detail view of a single news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDetail {
    /// The requested news item.
    pub news: NewsItem,
    /// All comments on the item, oldest first.
    pub comments: Vec<Comment>,
    /// Present iff the caller is authenticated. Skipped when serialized so
    /// an anonymous context truly contains no descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_form: Option<CommentForm>,
}

/// Derive the comment-form capability descriptor from caller state.
///
/// A pure function of the caller's authentication state: authenticated
/// callers get a form bound to their identity, anonymous callers get none.
/// No role or permission beyond "authenticated vs not" is consulted.
#[must_use]
pub fn comment_form_for(caller: &Caller, news_id: NewsId) -> Option<CommentForm> {
    caller.user_id().map(|author| CommentForm { news_id, author })
}
