pub mod articles;
pub mod caller;
pub mod serde_time;
pub mod views;

pub use articles::ArticleDto;
pub use caller::CallerOrigin;
pub use views::{ArticleListView, ArticleView, CreateFormView, EditFormView};
