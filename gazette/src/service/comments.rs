use crate::Gazette;
use gazette_core::{Comment, GazetteError};
use gazette_types::{Caller, Capability, CommentId, NewsId, UserId};

fn validated_text(text: &str) -> Result<&str, GazetteError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GazetteError::InvalidArg(
            "comment text must not be blank".to_string(),
        ));
    }
    Ok(trimmed)
}

impl Gazette {
    /// Submit a comment on a news item as the given caller.
    ///
    /// Behavior: authentication is re-verified here, before any store
    /// access — the read path's comment-form descriptor is a rendering
    /// hint, never an authorization proof. The target item must exist
    /// ([`GazetteError::NotFound`] otherwise) and the text must not be
    /// blank. The store assigns the creation timestamp, so the new comment
    /// lands at the end of subsequent ordered reads.
    pub async fn submit_comment(
        &self,
        news: NewsId,
        caller: &Caller,
        text: &str,
    ) -> Result<Comment, GazetteError> {
        let author = self.require_user(caller, Capability::SubmitComment)?;
        let text = validated_text(text)?;
        self.news_reader(Capability::NewsItem)?.news_item(news).await?;
        let comment = self
            .comment_writer(Capability::SubmitComment)?
            .insert_comment(news, author, text)
            .await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(%news, comment = %comment.id, "comment submitted");
        Ok(comment)
    }

    /// Replace the text of an existing comment.
    ///
    /// Behavior: only the comment's author may edit it
    /// ([`GazetteError::Forbidden`] otherwise); the comment must belong to
    /// the given news item. Edits never touch the creation timestamp, so
    /// thread order is stable.
    pub async fn edit_comment(
        &self,
        news: NewsId,
        comment: CommentId,
        caller: &Caller,
        text: &str,
    ) -> Result<Comment, GazetteError> {
        let author = self.require_user(caller, Capability::EditComment)?;
        let text = validated_text(text)?;
        let existing = self.owned_comment(news, comment).await?;
        if existing.author != author {
            return Err(GazetteError::forbidden(format!("edit comment {comment}")));
        }
        self.comment_writer(Capability::EditComment)?
            .update_comment(comment, text)
            .await
    }

    /// Remove an existing comment.
    ///
    /// Behavior: same ownership rules as editing. The comment disappears
    /// from subsequent ordered reads.
    pub async fn delete_comment(
        &self,
        news: NewsId,
        comment: CommentId,
        caller: &Caller,
    ) -> Result<(), GazetteError> {
        let author = self.require_user(caller, Capability::DeleteComment)?;
        let existing = self.owned_comment(news, comment).await?;
        if existing.author != author {
            return Err(GazetteError::forbidden(format!("delete comment {comment}")));
        }
        self.comment_writer(Capability::DeleteComment)?
            .remove_comment(comment)
            .await
    }

    fn require_user(&self, caller: &Caller, cap: Capability) -> Result<UserId, GazetteError> {
        caller
            .user_id()
            .ok_or(GazetteError::unauthenticated(cap.as_str()))
    }

    // Loads a comment and checks it hangs off the expected news item; a
    // mismatch reads as absence, not as a permission problem.
    async fn owned_comment(
        &self,
        news: NewsId,
        comment: CommentId,
    ) -> Result<Comment, GazetteError> {
        let existing = self
            .comment_reader(Capability::Comment)?
            .comment(comment)
            .await?;
        if existing.news_id != news {
            return Err(GazetteError::not_found(format!(
                "comment {comment} on news item {news}"
            )));
        }
        Ok(existing)
    }
}
