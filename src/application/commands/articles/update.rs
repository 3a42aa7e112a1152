use super::ArticleCommandService;
use crate::{
    application::{
        authorization::ensure_admin,
        dto::{ArticleDto, CallerOrigin},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleBody, ArticleTitle},
};

pub struct UpdateArticleCommand {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    /// Replace title and body of an existing article.
    ///
    /// The existence check and the write are separate store calls. If the
    /// article vanishes in between, the store's fail-closed `update` turns
    /// the race into `NotPersisted` rather than resurrecting the record.
    pub async fn update_article(
        &self,
        origin: &CallerOrigin,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_admin(self.admin_gate.as_ref(), origin).await?;

        let UpdateArticleCommand { id, title, body } = command;
        let mut article = self
            .read_repo
            .find_by_raw_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Sorry, this article no longer exists"))?;

        article.revise(ArticleTitle::new(title.trim())?, ArticleBody::new(body.trim()));

        if !self.write_repo.update(&article).await? {
            tracing::warn!(article_id = %article.id, "store did not acknowledge article update");
            return Err(ApplicationError::not_persisted(
                "Failed to update the article, please try again.",
            ));
        }

        tracing::info!(article_id = %article.id, "article updated");
        Ok(article.into())
    }
}
