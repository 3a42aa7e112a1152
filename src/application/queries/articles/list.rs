use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListView, CallerOrigin},
        error::ApplicationResult,
    },
    domain::article::{PageDescriptor, PageNumber},
};

pub struct ListArticlesQuery {
    /// Raw `page` query parameter, if any.
    pub page: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        origin: &CallerOrigin,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListView> {
        let page_number = PageNumber::parse_or_first(query.page.as_deref());

        let total_count = self.read_repo.count().await?;
        let articles = self
            .read_repo
            .fetch_page(page_number, self.page_size)
            .await?;
        let descriptor = PageDescriptor::new(page_number, self.page_size, total_count);

        if descriptor.is_past_end() {
            tracing::debug!(
                page = page_number.get(),
                page_count = descriptor.page_count,
                "requested page is past the end of the listing"
            );
        }

        let is_admin = self.admin_gate.is_admin(origin).await;

        Ok(ArticleListView::new(articles, descriptor, is_admin))
    }
}
