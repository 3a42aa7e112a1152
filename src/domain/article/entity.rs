// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle, PublishDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub publish_date: PublishDate,
}

impl Article {
    pub fn new(
        id: ArticleId,
        title: ArticleTitle,
        body: ArticleBody,
        publish_date: PublishDate,
    ) -> Self {
        Self {
            id,
            title,
            body,
            publish_date,
        }
    }

    /// Replace the editable content. Id and publish date never change after creation.
    pub fn revise(&mut self, title: ArticleTitle, body: ArticleBody) {
        self.title = title;
        self.body = body;
    }
}
