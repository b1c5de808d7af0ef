use std::collections::HashMap;

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use gazette_types::{Caller, UserId};

/// Maps request headers to a caller identity.
///
/// Session machinery is an external collaborator; this trait is the seam it
/// plugs into. Implementations must treat unknown or missing credentials as
/// anonymous, never as an error.
pub trait CallerResolver: Send + Sync {
    /// Resolve the caller for a request.
    fn resolve(&self, headers: &HeaderMap) -> Caller;
}

/// Resolver backed by a static bearer-token table.
///
/// Good enough for demos and tests; a production deployment would implement
/// [`CallerResolver`] against its real session store.
pub struct TokenCallerResolver {
    tokens: HashMap<String, UserId>,
}

impl TokenCallerResolver {
    /// Build from an explicit token table.
    #[must_use]
    pub fn new(tokens: HashMap<String, UserId>) -> Self {
        Self { tokens }
    }

    /// Parse a `token=user_id` comma-separated table, the `GAZETTE_TOKENS`
    /// environment format. Malformed pairs are skipped.
    #[must_use]
    pub fn from_table(table: &str) -> Self {
        let tokens = table
            .split(',')
            .filter_map(|pair| {
                let (token, id) = pair.split_once('=')?;
                let token = token.trim();
                let id: i64 = id.trim().parse().ok()?;
                (!token.is_empty()).then(|| (token.to_string(), UserId::new(id)))
            })
            .collect();
        Self { tokens }
    }
}

impl CallerResolver for TokenCallerResolver {
    fn resolve(&self, headers: &HeaderMap) -> Caller {
        let bearer = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));
        match bearer.and_then(|token| self.tokens.get(token.trim())) {
            Some(user) => Caller::User(*user),
            None => Caller::Anonymous,
        }
    }
}
