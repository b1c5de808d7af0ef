//! Middleware trait for wrapping `ContentStore` implementations.

use std::sync::Arc;

use crate::store::ContentStore;

/// Trait implemented by store middleware layers.
///
/// A middleware consumes an inner `ContentStore` and returns a wrapped store
/// that augments or restricts behavior (e.g., caching, instrumentation).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner store and return the wrapped store.
    fn apply(self: Box<Self>, inner: Arc<dyn ContentStore>) -> Arc<dyn ContentStore>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
