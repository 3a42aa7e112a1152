use super::ArticleQueryService;
use crate::application::{
    authorization::ensure_admin,
    dto::{CallerOrigin, CreateFormView, EditFormView},
    error::{ApplicationError, ApplicationResult},
};

pub struct EditArticleFormQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn create_form(&self, origin: &CallerOrigin) -> ApplicationResult<CreateFormView> {
        ensure_admin(self.admin_gate.as_ref(), origin).await?;
        Ok(CreateFormView::default())
    }

    /// The admin check comes first; only admins can learn whether the article exists.
    pub async fn edit_form(
        &self,
        origin: &CallerOrigin,
        query: EditArticleFormQuery,
    ) -> ApplicationResult<EditFormView> {
        ensure_admin(self.admin_gate.as_ref(), origin).await?;

        let article = self
            .read_repo
            .find_by_raw_id(&query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Sorry, this article no longer exists"))?;

        Ok(EditFormView {
            article: article.into(),
        })
    }
}
