use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::helpers::{ALICE, BOB, at, day, gazette_over, MockStore};
use gazette::{Caller, Gazette, GazetteError, NewsId};
use gazette_memory::MemoryStore;

#[tokio::test]
async fn authenticated_submission_lands_at_the_end_of_the_thread() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;
    store.seed_comment(news, ALICE, "earlier", at(0)).await;

    let gazette = gazette_over(store);
    let submitted = gazette
        .submit_comment(news, &Caller::User(BOB), "fresh take")
        .await
        .unwrap();
    assert_eq!(submitted.author, BOB);
    assert_eq!(submitted.news_id, news);

    let detail = gazette.news_detail(news, &Caller::Anonymous).await.unwrap();
    assert_eq!(detail.comments.last().map(|c| c.id), Some(submitted.id));
}

#[tokio::test]
async fn anonymous_submission_is_rejected_before_any_store_write() {
    let writes = Arc::new(AtomicUsize::new(0));
    let writes_seen = writes.clone();
    let store = MockStore::builder()
        .name("write_probe")
        .with_news_item_fn(|id| Err(GazetteError::not_found(format!("news item {id}"))))
        .with_insert_comment_fn(move |_news, _author, _text| {
            writes_seen.fetch_add(1, Ordering::SeqCst);
            Err(GazetteError::Other("should never be reached".to_string()))
        })
        .build();

    let gazette = Gazette::builder().with_store(store).build().unwrap();
    let err = gazette
        .submit_comment(NewsId::new(1), &Caller::Anonymous, "hello")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GazetteError::Unauthenticated {
            action: "submit-comment"
        }
    ));
    assert_eq!(writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blank_text_is_rejected_as_invalid() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;

    let err = gazette_over(store)
        .submit_comment(news, &Caller::User(ALICE), "   \n\t")
        .await
        .unwrap_err();
    assert!(matches!(err, GazetteError::InvalidArg(_)));
}

#[tokio::test]
async fn submission_to_an_unknown_item_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    store.seed_news("Item", "Just text.", day(0)).await;

    let err = gazette_over(store)
        .submit_comment(NewsId::new(42), &Caller::User(ALICE), "hello")
        .await
        .unwrap_err();
    assert!(matches!(err, GazetteError::NotFound { .. }));
}

#[tokio::test]
async fn submission_through_a_read_only_store_is_unsupported() {
    let store = MemoryStore::new();
    let news = store.seed_news("Item", "Just text.", day(0)).await;

    let gazette = gazette_over(Arc::new(store.into_read_only()));
    let err = gazette
        .submit_comment(news, &Caller::User(ALICE), "hello")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GazetteError::Unsupported {
            capability: "submit-comment"
        }
    ));
}

#[tokio::test]
async fn submitted_text_is_stored_trimmed() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;

    let submitted = gazette_over(store)
        .submit_comment(news, &Caller::User(ALICE), "  padded  ")
        .await
        .unwrap();
    assert_eq!(submitted.text, "padded");
}
