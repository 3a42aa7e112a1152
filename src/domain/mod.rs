pub mod admin;
pub mod article;
pub mod errors;
