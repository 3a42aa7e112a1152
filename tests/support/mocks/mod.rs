// tests/support/mocks/mod.rs
pub mod admin;
pub mod article_store;
pub mod util;

pub use admin::StaticAdminGate;
pub use article_store::{InMemoryArticleStore, WriteOp};
pub use util::{SequentialIds, fixed_publish_date};
