use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleView, CallerOrigin},
    error::{ApplicationError, ApplicationResult},
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        origin: &CallerOrigin,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleView> {
        let article = self
            .read_repo
            .find_by_raw_id(&query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Sorry, this article no longer exists"))?;
        let is_admin = self.admin_gate.is_admin(origin).await;

        Ok(ArticleView {
            article: article.into(),
            is_admin,
        })
    }
}
