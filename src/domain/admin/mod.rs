pub mod entity;
pub mod repository;

pub use entity::AdminRecord;
pub use repository::AdminRepository;
