use thiserror::Error;

/// Unified error type for the Gazette workspace.
///
/// This wraps capability mismatches, argument validation errors,
/// store-tagged failures, not-found conditions, and the authorization
/// outcomes of the comment write path.
#[derive(Debug, Error)]
pub enum GazetteError {
    /// The requested capability is not implemented by the target store.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "submit-comment").
        capability: &'static str,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The backing store returned an error.
    #[error("{store} failed: {msg}")]
    Store {
        /// Store name that failed.
        store: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "news item 7".
        what: String,
    },

    /// The operation requires an authenticated caller.
    #[error("authentication required: {action}")]
    Unauthenticated {
        /// Action label (e.g. "submit-comment").
        action: &'static str,
    },

    /// The caller is authenticated but not permitted to act on this resource.
    #[error("forbidden: {what}")]
    Forbidden {
        /// Description of the refused action, e.g. "edit comment 4".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl GazetteError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build a `Store` error with the store name and message.
    pub fn store(store: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Store {
            store: store.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `Unauthenticated` error for an action label.
    #[must_use]
    pub const fn unauthenticated(action: &'static str) -> Self {
        Self::Unauthenticated { action }
    }

    /// Helper: build a `Forbidden` error for a description of the refused action.
    pub fn forbidden(what: impl Into<String>) -> Self {
        Self::Forbidden { what: what.into() }
    }
}
