use std::sync::Arc;

use gazette_core::store::{CommentReader, CommentWriter, ContentStore, NewsReader};
use gazette_core::{GazetteError, Middleware};
use gazette_types::{Capability, GazetteConfig, StoreKey};

/// Facade routing read and write operations to the configured content store.
pub struct Gazette {
    pub(crate) store: Arc<dyn ContentStore>,
    pub(crate) cfg: GazetteConfig,
}

impl std::fmt::Debug for Gazette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gazette").field("cfg", &self.cfg).finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Gazette`] facade with custom configuration.
pub struct GazetteBuilder {
    store: Option<Arc<dyn ContentStore>>,
    middleware: Vec<Box<dyn Middleware>>,
    cfg: GazetteConfig,
}

impl Default for GazetteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GazetteBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no store; you must register exactly one via
    ///   [`with_store`](Self::with_store).
    /// - The default configuration caps the home page at 10 items.
    /// - Middleware is optional; without it the facade talks to the store
    ///   directly.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            middleware: vec![],
            cfg: GazetteConfig::default(),
        }
    }

    /// Register the content store backing this facade.
    ///
    /// Behavior and trade-offs:
    /// - Exactly one store is supported; registering again replaces the
    ///   previous one.
    /// - The store's advertised capabilities decide which operations the
    ///   facade can serve; missing roles surface as `Unsupported` errors at
    ///   call time, not at build time.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn ContentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Append a middleware layer to wrap the store with.
    ///
    /// Behavior and trade-offs:
    /// - Layers apply innermost-first in registration order: the first
    ///   registered middleware sits closest to the store.
    /// - Middleware may restrict capabilities (a wrapper only advertises
    ///   what its inner store has) but never widens them.
    #[must_use]
    pub fn with_middleware(mut self, middleware: Box<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Replace the whole configuration value.
    #[must_use]
    pub const fn config(mut self, cfg: GazetteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Cap the number of news items returned by the home-page listing.
    #[must_use]
    pub const fn news_count_on_home_page(mut self, count: usize) -> Self {
        self.cfg.news_count_on_home_page = count;
        self
    }

    /// Finalize the facade.
    ///
    /// Fails with [`GazetteError::InvalidArg`] when no store was registered.
    pub fn build(self) -> Result<Gazette, GazetteError> {
        let mut store = self
            .store
            .ok_or_else(|| GazetteError::InvalidArg("a content store is required".to_string()))?;
        for middleware in self.middleware {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                middleware = middleware.name(),
                config = %middleware.config_json(),
                "applying store middleware"
            );
            store = middleware.apply(store);
        }
        Ok(Gazette {
            store,
            cfg: self.cfg,
        })
    }
}

impl Gazette {
    /// Start building a facade.
    #[must_use]
    pub fn builder() -> GazetteBuilder {
        GazetteBuilder::new()
    }

    /// The injected service configuration.
    #[must_use]
    pub const fn config(&self) -> &GazetteConfig {
        &self.cfg
    }

    /// Key of the configured store, for logs and introspection.
    #[must_use]
    pub fn store_key(&self) -> StoreKey {
        self.store.key()
    }

    pub(crate) fn news_reader(&self, cap: Capability) -> Result<&dyn NewsReader, GazetteError> {
        self.store
            .as_news_reader()
            .ok_or_else(|| GazetteError::unsupported(cap.as_str()))
    }

    pub(crate) fn comment_reader(
        &self,
        cap: Capability,
    ) -> Result<&dyn CommentReader, GazetteError> {
        self.store
            .as_comment_reader()
            .ok_or_else(|| GazetteError::unsupported(cap.as_str()))
    }

    pub(crate) fn comment_writer(
        &self,
        cap: Capability,
    ) -> Result<&dyn CommentWriter, GazetteError> {
        self.store
            .as_comment_writer()
            .ok_or_else(|| GazetteError::unsupported(cap.as_str()))
    }
}
