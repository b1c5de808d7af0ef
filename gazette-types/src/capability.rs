use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for store discovery, errors, and telemetry.
///
/// These map one-to-one with service operations and allow consistent
/// Display formatting and match-exhaustive handling when adding new
/// capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Date-descending news listing for the home page.
    RecentNews,
    /// Single news item lookup by id.
    NewsItem,

    /// Chronological comment list for a news item.
    Comments,
    /// Single comment lookup by id.
    Comment,

    /// Comment submission by an authenticated user.
    SubmitComment,
    /// Comment text edit by its author.
    EditComment,
    /// Comment removal by its author.
    DeleteComment,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RecentNews => "recent-news",
            Self::NewsItem => "news-item",
            Self::Comments => "comments",
            Self::Comment => "comment",
            Self::SubmitComment => "submit-comment",
            Self::EditComment => "edit-comment",
            Self::DeleteComment => "delete-comment",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
