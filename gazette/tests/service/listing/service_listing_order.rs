use crate::helpers::{day, gazette_over, store_with_daily_news};

#[tokio::test]
async fn listing_dates_are_non_increasing() {
    let gazette = gazette_over(store_with_daily_news(7).await);
    let page = gazette.home_page().await.unwrap();

    let dates: Vec<_> = page.iter().map(|n| n.published_on).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn eleven_daily_items_drop_exactly_the_oldest() {
    // Items dated day(0), day(-1), …, day(-10): the page holds the ten most
    // recent and the item dated day(-10) is excluded.
    let gazette = gazette_over(store_with_daily_news(11).await);
    let page = gazette.home_page().await.unwrap();

    assert_eq!(page.len(), 10);
    assert_eq!(page.first().map(|n| n.published_on), Some(day(0)));
    assert_eq!(page.last().map(|n| n.published_on), Some(day(-9)));
    assert!(page.iter().all(|n| n.published_on != day(-10)));
}

#[tokio::test]
async fn same_day_items_list_newest_id_first_and_deterministically() {
    let store = store_with_daily_news(0).await;
    let first = store.seed_news("morning edition", "text", day(0)).await;
    let second = store.seed_news("evening edition", "text", day(0)).await;

    let gazette = gazette_over(store);
    let page = gazette.home_page().await.unwrap();
    assert_eq!(page[0].id, second);
    assert_eq!(page[1].id, first);

    let again = gazette.home_page().await.unwrap();
    assert_eq!(page, again);
}
