// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        authorization::ensure_admin,
        dto::{ArticleDto, CallerOrigin},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleBody, ArticleId, ArticleTitle, PublishDate},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    /// Raw `yyyy-MM-dd HH:mm:ss` text as submitted.
    pub publish_date: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    publish_date: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn publish_date(mut self, publish_date: impl Into<String>) -> Self {
        self.publish_date = Some(publish_date.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            publish_date: self.publish_date.ok_or("publish_date is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        origin: &CallerOrigin,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_admin(self.admin_gate.as_ref(), origin).await?;

        let title = ArticleTitle::new(command.title.trim())?;
        let body = ArticleBody::new(command.body.trim());
        let publish_date = PublishDate::parse(&command.publish_date)?;
        let id = ArticleId::new(self.id_generator.next_id())?;

        let article = Article::new(id, title, body, publish_date);

        if !self.write_repo.insert(&article).await? {
            tracing::warn!(article_id = %article.id, "store did not acknowledge article insert");
            return Err(ApplicationError::not_persisted(
                "Failed to save your article, if this continues, please contact dev",
            ));
        }

        tracing::info!(article_id = %article.id, "article created");
        Ok(article.into())
    }
}
