use crate::Gazette;
use gazette_core::{GazetteError, NewsDetail, comment_form_for};
use gazette_types::{Caller, Capability, NewsId};

impl Gazette {
    /// Fetch the detail context for one news item.
    ///
    /// Behavior: fails with [`GazetteError::NotFound`] for an unknown id —
    /// no partial context is produced. Otherwise returns the item, its
    /// comments oldest-first, and a comment-form descriptor iff the caller
    /// is authenticated. The descriptor is derived purely from caller state;
    /// the write path re-verifies authentication independently.
    pub async fn news_detail(
        &self,
        id: NewsId,
        caller: &Caller,
    ) -> Result<NewsDetail, GazetteError> {
        let news = self.news_reader(Capability::NewsItem)?.news_item(id).await?;
        let comments = self
            .comment_reader(Capability::Comments)?
            .comments_for(id)
            .await?;
        Ok(NewsDetail {
            news,
            comments,
            comment_form: comment_form_for(caller, id),
        })
    }
}
