// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_admin;
mod sqlite_article;

pub use sqlite_admin::SqliteAdminRepository;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
