use crate::domain::article::Article;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "2023-04-16 16:41:00")]
    pub publish_date: NaiveDateTime,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            publish_date: article.publish_date.as_naive(),
        }
    }
}
