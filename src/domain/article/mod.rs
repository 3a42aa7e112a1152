pub mod entity;
pub mod pagination;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use pagination::{DEFAULT_PAGE_SIZE, PageDescriptor, PageNumber, PageSize};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle, PUBLISH_DATE_FORMAT, PublishDate};
