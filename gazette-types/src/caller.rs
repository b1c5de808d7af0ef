//! Caller identity as seen by the read and write paths.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// Authentication state of the party making a request.
///
/// This is the only identity signal the services consult: the comment form
/// is exposed iff the caller is [`Caller::User`], and comment edits/deletes
/// additionally require identity-equality with the comment's author. No
/// roles or finer-grained permissions exist at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Caller {
    /// Unauthenticated request.
    Anonymous,
    /// Request made on behalf of the given authenticated user.
    User(UserId),
}

impl Caller {
    /// Whether the caller carries an authenticated identity.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// The authenticated user id, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(*id),
        }
    }
}
