//! gazette-core
//!
//! Core types, traits, and utilities shared across the Gazette ecosystem.
//!
//! - `news` / `comment`: domain models.
//! - `context`: result contexts handed to rendering layers, including the
//!   comment-form capability descriptor and the pure visibility function.
//! - `store`: the `ContentStore` trait and capability role traits.
//! - `error`: the unified `GazetteError`.
//! - `middleware`: the trait implemented by store wrappers.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Store traits are `async` via `async-trait` and are exercised under a
//! Tokio 1.x runtime throughout the workspace. The trait definitions
//! themselves are runtime-agnostic; backends may hold Tokio primitives.
#![warn(missing_docs)]

mod comment;
mod context;
/// Unified error type for the Gazette workspace.
pub mod error;
/// Middleware trait implemented by store wrappers.
pub mod middleware;
mod news;
/// Store capability traits and the primary `ContentStore` interface.
pub mod store;

pub use comment::Comment;
pub use context::{CommentForm, NewsDetail, comment_form_for};
pub use error::GazetteError;
pub use middleware::Middleware;
pub use news::NewsItem;
pub use store::{CommentReader, CommentWriter, ContentStore, NewsReader};

pub use gazette_types::{
    CacheConfig, Caller, Capability, CommentId, GazetteConfig, NewsId, StoreKey, UserId,
};
