use std::sync::Arc;

use crate::helpers::{ALICE, day, gazette_over};
use gazette::{Caller, CommentForm};
use gazette_memory::MemoryStore;

#[tokio::test]
async fn anonymous_caller_sees_no_comment_form() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;

    let detail = gazette_over(store)
        .news_detail(news, &Caller::Anonymous)
        .await
        .unwrap();
    assert!(detail.comment_form.is_none());
}

#[tokio::test]
async fn authenticated_caller_gets_a_form_bound_to_their_identity() {
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;

    let detail = gazette_over(store)
        .news_detail(news, &Caller::User(ALICE))
        .await
        .unwrap();
    assert_eq!(
        detail.comment_form,
        Some(CommentForm {
            news_id: news,
            author: ALICE
        })
    );
}

#[tokio::test]
async fn form_visibility_depends_only_on_authentication_state() {
    // Same item, same data; only the caller differs.
    let store = Arc::new(MemoryStore::new());
    let news = store.seed_news("Item", "Just text.", day(0)).await;
    let gazette = gazette_over(store);

    let anonymous = gazette.news_detail(news, &Caller::Anonymous).await.unwrap();
    let signed_in = gazette
        .news_detail(news, &Caller::User(ALICE))
        .await
        .unwrap();

    assert_eq!(anonymous.news, signed_in.news);
    assert_eq!(anonymous.comments, signed_in.comments);
    assert!(anonymous.comment_form.is_none());
    assert!(signed_in.comment_form.is_some());
}
