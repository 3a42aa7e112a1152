// src/application/ports/util.rs
pub trait ArticleIdGenerator: Send + Sync {
    /// A fresh identifier, unique across processes and restarts.
    fn next_id(&self) -> String;
}
