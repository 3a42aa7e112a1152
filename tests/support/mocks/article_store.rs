// tests/support/mocks/article_store.rs
use async_trait::async_trait;
use gamenews::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, PageNumber, PageSize,
};
use gamenews::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Insert(String),
    Update(String),
    Delete(String),
}

impl WriteOp {
    pub fn id(&self) -> &str {
        match self {
            Self::Insert(id) | Self::Update(id) | Self::Delete(id) => id,
        }
    }
}

/// Article store backed by a map that records every write it receives.
///
/// - `decline_writes`: writes reach the store but are not acknowledged.
/// - `vanish_after_lookup`: `find_by_id` returns the article and drops it,
///   as if a concurrent delete landed right after the existence check.
/// - `offline`: every call fails like a lost connection.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<HashMap<String, Article>>,
    writes: Mutex<Vec<WriteOp>>,
    lookups: AtomicUsize,
    pub decline_writes: AtomicBool,
    pub vanish_after_lookup: AtomicBool,
    pub offline: AtomicBool,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let store = Self::new();
        {
            let mut map = store.articles.lock().unwrap();
            for article in articles {
                map.insert(article.id.as_str().to_string(), article);
            }
        }
        store
    }

    pub fn writes(&self) -> Vec<WriteOp> {
        self.writes.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: &str) -> Option<Article> {
        self.articles.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    fn check_online(&self) -> DomainResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn record(&self, op: WriteOp) {
        self.writes.lock().unwrap().push(op);
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: &Article) -> DomainResult<bool> {
        self.check_online()?;
        self.record(WriteOp::Insert(article.id.as_str().to_string()));
        if self.decline_writes.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let mut map = self.articles.lock().unwrap();
        if map.contains_key(article.id.as_str()) {
            return Ok(false);
        }
        map.insert(article.id.as_str().to_string(), article.clone());
        Ok(true)
    }

    async fn update(&self, article: &Article) -> DomainResult<bool> {
        self.check_online()?;
        self.record(WriteOp::Update(article.id.as_str().to_string()));
        if self.decline_writes.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let mut map = self.articles.lock().unwrap();
        match map.get_mut(article.id.as_str()) {
            Some(stored) => {
                *stored = article.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<bool> {
        self.check_online()?;
        self.record(WriteOp::Delete(id.as_str().to_string()));
        if self.decline_writes.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self.articles.lock().unwrap().remove(id.as_str()).is_some())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn count(&self) -> DomainResult<u64> {
        self.check_online()?;
        Ok(self.articles.lock().unwrap().len() as u64)
    }

    async fn fetch_page(&self, page: PageNumber, size: PageSize) -> DomainResult<Vec<Article>> {
        self.check_online()?;
        let mut all: Vec<Article> = self.articles.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| {
            b.publish_date
                .cmp(&a.publish_date)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        let skip = usize::try_from(page.offset(size)).unwrap_or(usize::MAX);
        Ok(all.into_iter().skip(skip).take(size.get() as usize).collect())
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        self.check_online()?;
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let mut map = self.articles.lock().unwrap();
        if self.vanish_after_lookup.load(Ordering::SeqCst) {
            return Ok(map.remove(id.as_str()));
        }
        Ok(map.get(id.as_str()).cloned())
    }
}
