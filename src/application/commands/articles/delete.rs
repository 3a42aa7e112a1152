// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{
    authorization::ensure_admin,
    dto::CallerOrigin,
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        origin: &CallerOrigin,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        ensure_admin(self.admin_gate.as_ref(), origin).await?;

        let Some(article) = self.read_repo.find_by_raw_id(&command.id).await? else {
            return Err(ApplicationError::not_found(
                "Sorry, someone beat you to the punch. We couldn't find that article",
            ));
        };
        let id = article.id;

        if !self.write_repo.delete(&id).await? {
            tracing::warn!(article_id = %id, "store did not acknowledge article delete");
            return Err(ApplicationError::not_persisted(
                "Deletion of the article was not successful!",
            ));
        }

        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
