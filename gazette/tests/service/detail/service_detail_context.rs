use std::sync::Arc;

use crate::helpers::{ALICE, at, day, gazette_over};
use gazette::{Caller, GazetteError, NewsId};
use gazette_memory::MemoryStore;

#[tokio::test]
async fn detail_returns_the_item_with_its_comments_oldest_first() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Test news", "Just text.", day(0)).await;
    // Ten comments stamped now, now+1d, …, now+9d, seeded out of order.
    const DAY: i64 = 86_400;
    for offset in [3, 0, 7, 1, 9, 4, 2, 8, 5, 6] {
        store
            .seed_comment(news, ALICE, &format!("Text {offset}"), at(offset * DAY))
            .await;
    }

    let detail = gazette_over(store)
        .news_detail(news, &Caller::Anonymous)
        .await
        .unwrap();

    assert_eq!(detail.news.id, news);
    assert_eq!(detail.news.title, "Test news");
    let stamps: Vec<_> = detail.comments.iter().map(|c| c.created_at).collect();
    let expected: Vec<_> = (0..10).map(|i| at(i * DAY)).collect();
    assert_eq!(stamps, expected);
}

#[tokio::test]
async fn detail_of_an_item_without_comments_has_an_empty_thread() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Quiet news", "Just text.", day(0)).await;

    let detail = gazette_over(store)
        .news_detail(news, &Caller::Anonymous)
        .await
        .unwrap();
    assert!(detail.comments.is_empty());
}

#[tokio::test]
async fn detail_for_an_unknown_id_is_not_found_with_no_context() {
    let store = Arc::new(MemoryStore::new());
    store.seed_news("Present", "Just text.", day(0)).await;

    let err = gazette_over(store)
        .news_detail(NewsId::new(99), &Caller::Anonymous)
        .await
        .unwrap_err();
    assert!(matches!(err, GazetteError::NotFound { .. }));
}

#[tokio::test]
async fn detail_works_against_a_read_only_replica() {
    let store = MemoryStore::new();
    let news = store.seed_news("Replicated", "Just text.", day(0)).await;
    store.seed_comment(news, ALICE, "kept", at(0)).await;

    let gazette = gazette_over(Arc::new(store.into_read_only()));
    let detail = gazette.news_detail(news, &Caller::Anonymous).await.unwrap();
    assert_eq!(detail.comments.len(), 1);
}
