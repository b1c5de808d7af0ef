//! Gazette serves a small content-publishing application over a pluggable
//! content store.
//!
//! Overview
//! - Routes the two read components (home-page listing, news detail with
//!   comments) and the comment write operations through a single
//!   [`Gazette`] facade.
//! - Ordering guarantees live in the store contracts: listings come back
//!   publication-date descending, comment threads creation-time ascending,
//!   both with deterministic tie-breaks.
//! - The comment form is a capability descriptor derived purely from caller
//!   authentication state; the write path re-verifies authentication instead
//!   of trusting the descriptor.
//! - Normalizes error handling into [`GazetteError`] across stores and
//!   middleware.
//!
//! Key behaviors and trade-offs
//! - Capability discovery: a store advertises the roles it supports; calling
//!   an operation the store lacks fails fast with
//!   [`GazetteError::Unsupported`] rather than panicking or silently
//!   degrading. A read-only replica store simply never advertises the
//!   writer role.
//! - Middleware wraps the store at build time, innermost-first in
//!   registration order; a cache layer preserves read-your-writes for
//!   comment threads by invalidating on write.
//!
//! Examples
//! Building a facade over the in-memory store:
//! ```rust,ignore
//! use std::sync::Arc;
//! use gazette::{CacheMiddleware, Gazette};
//! use gazette_memory::MemoryStore;
//!
//! let store = Arc::new(MemoryStore::new());
//! let gazette = Gazette::builder()
//!     .with_store(store)
//!     .with_middleware(Box::new(CacheMiddleware::default()))
//!     .news_count_on_home_page(10)
//!     .build()?;
//! ```
//!
//! Reading the home page and a detail context:
//! ```rust,ignore
//! use gazette::{Caller, NewsId};
//!
//! let listing = gazette.home_page().await?;
//! let detail = gazette.news_detail(NewsId::new(1), &Caller::Anonymous).await?;
//! assert!(detail.comment_form.is_none());
//! ```
//!
//! Submitting a comment as an authenticated user:
//! ```rust,ignore
//! use gazette::{Caller, UserId};
//!
//! let me = Caller::User(UserId::new(7));
//! let comment = gazette.submit_comment(NewsId::new(1), &me, "Nice piece.").await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod service;

pub use crate::core::{Gazette, GazetteBuilder};

pub use gazette_middleware::{CacheMiddleware, TracingMiddleware};

// Re-export core types for convenience
pub use gazette_core::{
    // Foundational types
    CacheConfig,
    Caller,
    Capability,
    Comment,
    CommentForm,
    CommentId,
    // Store contracts
    CommentReader,
    CommentWriter,
    ContentStore,
    GazetteConfig,
    GazetteError,
    Middleware,
    NewsDetail,
    NewsId,
    NewsItem,
    NewsReader,
    StoreKey,
    UserId,
    comment_form_for,
};
