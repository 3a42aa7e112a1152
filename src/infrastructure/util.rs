use crate::application::ports::util::ArticleIdGenerator;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct UuidArticleIdGenerator;

impl ArticleIdGenerator for UuidArticleIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
