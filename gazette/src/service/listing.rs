use crate::Gazette;
use gazette_core::{GazetteError, NewsItem};
use gazette_types::Capability;

impl Gazette {
    /// Fetch the home-page listing.
    ///
    /// Behavior: at most `news_count_on_home_page` items, publication date
    /// descending with ties broken by id descending. A store with fewer
    /// items returns them all; an empty store yields an empty page.
    pub async fn home_page(&self) -> Result<Vec<NewsItem>, GazetteError> {
        let reader = self.news_reader(Capability::RecentNews)?;
        reader.recent_news(self.cfg.news_count_on_home_page).await
    }
}
