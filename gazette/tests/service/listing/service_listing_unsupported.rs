use crate::helpers::MockStore;
use gazette::{Gazette, GazetteError};

#[tokio::test]
async fn listing_against_a_store_without_the_news_role_is_unsupported() {
    // Only comment behavior configured: the mock advertises no news reader.
    let store = MockStore::builder()
        .name("comments_only")
        .with_comments_for_fn(|_news| Ok(vec![]))
        .build();

    let gazette = Gazette::builder().with_store(store).build().unwrap();
    let err = gazette.home_page().await.unwrap_err();
    assert!(matches!(
        err,
        GazetteError::Unsupported {
            capability: "recent-news"
        }
    ));
}
