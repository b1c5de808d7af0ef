use std::sync::Arc;

use crate::helpers::{ALICE, BOB, day};
use gazette::{CacheMiddleware, Caller, Gazette, TracingMiddleware};
use gazette_sqlite::SqliteStore;

// Full pass over the SQLite backend with the standard middleware stack:
// listing, detail visibility, then the whole comment lifecycle.
#[tokio::test]
async fn the_whole_service_works_over_sqlite() {
    let store = SqliteStore::open_in_memory().unwrap();
    for index in 0..4 {
        store
            .insert_news(&format!("News {index}"), "Just text.", day(-index))
            .unwrap();
    }
    let newest = store.insert_news("Breaking", "Just text.", day(1)).unwrap();

    let gazette = Gazette::builder()
        .with_store(Arc::new(store))
        .with_middleware(Box::new(TracingMiddleware))
        .with_middleware(Box::new(CacheMiddleware::default()))
        .news_count_on_home_page(3)
        .build()
        .unwrap();

    let page = gazette.home_page().await.unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page[0].id, newest);

    let anonymous = gazette
        .news_detail(newest, &Caller::Anonymous)
        .await
        .unwrap();
    assert!(anonymous.comment_form.is_none());
    assert!(anonymous.comments.is_empty());

    let alice = Caller::User(ALICE);
    let first = gazette
        .submit_comment(newest, &alice, "First!")
        .await
        .unwrap();
    let second = gazette
        .submit_comment(newest, &Caller::User(BOB), "Second.")
        .await
        .unwrap();

    let detail = gazette.news_detail(newest, &alice).await.unwrap();
    assert!(detail.comment_form.is_some());
    let ids: Vec<_> = detail.comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, [first.id, second.id]);

    let edited = gazette
        .edit_comment(newest, first.id, &alice, "First, on reflection.")
        .await
        .unwrap();
    assert_eq!(edited.created_at, first.created_at);

    gazette
        .delete_comment(newest, second.id, &Caller::User(BOB))
        .await
        .unwrap();

    let final_detail = gazette.news_detail(newest, &alice).await.unwrap();
    assert_eq!(final_detail.comments.len(), 1);
    assert_eq!(final_detail.comments[0].text, "First, on reflection.");
}
