use crate::domain::article::entity::Article;
use crate::domain::article::pagination::{PageNumber, PageSize};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Write side of the article store.
///
/// Every method reports whether the store acknowledged the write. `update`
/// and `delete` fail closed: when no article with the given id exists they
/// return `Ok(false)` and leave the store untouched.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: &Article) -> DomainResult<bool>;
    async fn update(&self, article: &Article) -> DomainResult<bool>;
    async fn delete(&self, id: &ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;
    /// Newest first by publish date. An offset past the end yields an empty page.
    async fn fetch_page(&self, page: PageNumber, size: PageSize) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;

    /// Lookup by id text as it arrived in a request path. Text that can never
    /// name an article, such as a blank id, is a miss.
    async fn find_by_raw_id(&self, raw: &str) -> DomainResult<Option<Article>> {
        match ArticleId::new(raw) {
            Ok(id) => self.find_by_id(&id).await,
            Err(_) => Ok(None),
        }
    }
}
