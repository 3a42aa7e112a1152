//! Payloads handed to the presentation layer, one per use case.
use crate::domain::article::{Article, PageDescriptor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ArticleDto;

/// One page of the article listing. `is_admin` only controls which
/// affordances a client shows; the listing itself is public.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListView {
    pub articles: Vec<ArticleDto>,
    pub page_size: u32,
    pub page_number: u32,
    pub total_count: u64,
    pub page_count: u64,
    pub is_admin: bool,
}

impl ArticleListView {
    pub fn new(articles: Vec<Article>, page: PageDescriptor, is_admin: bool) -> Self {
        Self {
            articles: articles.into_iter().map(Into::into).collect(),
            page_size: page.page_size.get(),
            page_number: page.page_number.get(),
            total_count: page.total_count,
            page_count: page.page_count,
            is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleView {
    pub article: ArticleDto,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditFormView {
    pub article: ArticleDto,
}

/// Empty create form. Carries only the publish date format the form expects.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFormView {
    pub publish_date_format: String,
}

impl Default for CreateFormView {
    fn default() -> Self {
        Self {
            publish_date_format: "yyyy-MM-dd HH:mm:ss".into(),
        }
    }
}
