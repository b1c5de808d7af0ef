use std::sync::{Arc, Mutex};

use crate::helpers::store_with_daily_news;
use gazette::{ContentStore, Gazette, GazetteConfig, GazetteError, Middleware, StoreKey};

#[test]
fn building_without_a_store_fails() {
    let err = Gazette::builder().build().unwrap_err();
    assert!(matches!(err, GazetteError::InvalidArg(_)));
}

#[tokio::test]
async fn the_store_key_is_exposed_for_introspection() {
    let gazette = Gazette::builder()
        .with_store(store_with_daily_news(1).await)
        .build()
        .unwrap();
    assert_eq!(gazette.store_key(), StoreKey::new("gazette-memory"));
}

#[tokio::test]
async fn config_replaces_wholesale_and_field_setters_override() {
    let gazette = Gazette::builder()
        .with_store(store_with_daily_news(1).await)
        .config(GazetteConfig {
            news_count_on_home_page: 3,
        })
        .news_count_on_home_page(7)
        .build()
        .unwrap();
    assert_eq!(gazette.config().news_count_on_home_page, 7);
}

/// Records its label when applied; the store passes through untouched.
struct LabelingMiddleware {
    label: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Middleware for LabelingMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn ContentStore>) -> Arc<dyn ContentStore> {
        self.log.lock().expect("log lock").push(self.label);
        inner
    }

    fn name(&self) -> &'static str {
        self.label
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}

#[tokio::test]
async fn middleware_applies_innermost_first_in_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let store = store_with_daily_news(1).await;

    let gazette = Gazette::builder()
        .with_store(store)
        .with_middleware(Box::new(LabelingMiddleware {
            label: "first",
            log: log.clone(),
        }))
        .with_middleware(Box::new(LabelingMiddleware {
            label: "second",
            log: log.clone(),
        }))
        .build()
        .unwrap();

    assert_eq!(*log.lock().expect("log lock"), ["first", "second"]);
    // The pass-through middleware left the store fully functional.
    assert_eq!(gazette.home_page().await.unwrap().len(), 1);
}
