use std::sync::Arc;

use crate::helpers::{ALICE, BOB, at, day, gazette_over};
use gazette::{Caller, GazetteError};
use gazette_memory::MemoryStore;

#[tokio::test]
async fn the_author_can_delete_and_the_thread_shrinks() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;
    let doomed = store.seed_comment(news, ALICE, "regretted", at(0)).await;
    store.seed_comment(news, BOB, "kept", at(10)).await;

    let gazette = gazette_over(store);
    gazette
        .delete_comment(news, doomed, &Caller::User(ALICE))
        .await
        .unwrap();

    let detail = gazette.news_detail(news, &Caller::Anonymous).await.unwrap();
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].text, "kept");
}

#[tokio::test]
async fn a_different_user_cannot_delete() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;
    let comment = store.seed_comment(news, ALICE, "mine", at(0)).await;

    let gazette = gazette_over(store);
    let err = gazette
        .delete_comment(news, comment, &Caller::User(BOB))
        .await
        .unwrap_err();
    assert!(matches!(err, GazetteError::Forbidden { .. }));

    // The comment survives the refused attempt.
    let detail = gazette.news_detail(news, &Caller::Anonymous).await.unwrap();
    assert_eq!(detail.comments.len(), 1);
}

#[tokio::test]
async fn deleting_a_nonexistent_comment_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;

    let err = gazette_over(store)
        .delete_comment(news, gazette_types::CommentId::new(9), &Caller::User(ALICE))
        .await
        .unwrap_err();
    assert!(matches!(err, GazetteError::NotFound { .. }));
}
