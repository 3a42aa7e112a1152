// tests/support/builders.rs
use chrono::{Duration, NaiveDateTime};
use gamenews::domain::article::{Article, ArticleBody, ArticleId, ArticleTitle, PublishDate};

use super::mocks::fixed_publish_date;

pub struct ArticleBuilder {
    id: String,
    title: String,
    body: String,
    publish_date: NaiveDateTime,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: "article-1".into(),
            title: "Test Article".into(),
            body: "Test body".into(),
            publish_date: fixed_publish_date(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Publish date shifted by whole days from the fixture date.
    pub fn days_after_fixture(mut self, days: i64) -> Self {
        self.publish_date = fixed_publish_date() + Duration::days(days);
        self
    }

    pub fn build(self) -> Article {
        Article::new(
            ArticleId::new(self.id).unwrap(),
            ArticleTitle::new(self.title).unwrap(),
            ArticleBody::new(self.body),
            PublishDate::from(self.publish_date),
        )
    }
}

/// Articles `article-1..=count`; a higher number is published later.
pub fn numbered_articles(count: usize) -> Vec<Article> {
    (1..=count)
        .map(|n| {
            ArticleBuilder::new()
                .id(format!("article-{n}"))
                .title(format!("Article {n}"))
                .days_after_fixture(i64::try_from(n).unwrap())
                .build()
        })
        .collect()
}
