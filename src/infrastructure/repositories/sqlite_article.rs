use super::error::{is_unique_violation, map_sqlx};
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
    PageNumber, PageSize, PublishDate,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    body: String,
    publish_date: NaiveDateTime,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article::new(
            ArticleId::new(row.id)?,
            ArticleTitle::new(row.title)?,
            ArticleBody::new(row.body),
            PublishDate::from(row.publish_date),
        ))
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: &Article) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO articles (id, title, body, publish_date) VALUES (?, ?, ?, ?)",
        )
        .bind(article.id.as_str())
        .bind(article.title.as_str())
        .bind(article.body.as_str())
        .bind(article.publish_date.as_naive())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            Err(err) if is_unique_violation(&err) => {
                tracing::warn!(article_id = %article.id, "article id already taken, insert refused");
                Ok(false)
            }
            Err(err) => Err(map_sqlx(err)),
        }
    }

    // Conditional on the row existing: a vanished article yields `false`, never a new row.
    async fn update(&self, article: &Article) -> DomainResult<bool> {
        let result = sqlx::query("UPDATE articles SET title = ?, body = ? WHERE id = ?")
            .bind(article.title.as_str())
            .bind(article.body.as_str())
            .bind(article.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total)
            .map_err(|_| DomainError::Persistence(format!("negative article count: {total}")))
    }

    async fn fetch_page(&self, page: PageNumber, size: PageSize) -> DomainResult<Vec<Article>> {
        // Offsets beyond i64 are past any real table; clamp and let the query return nothing.
        let offset = i64::try_from(page.offset(size)).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, publish_date FROM articles ORDER BY publish_date DESC, id ASC LIMIT ? OFFSET ?",
        )
        .bind(i64::from(size.get()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        tracing::debug!(page = page.get(), size = size.get(), rows = rows.len(), "fetched article page");

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, publish_date FROM articles WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
