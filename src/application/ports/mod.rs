// src/application/ports/mod.rs
pub mod security;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AdminGatePort = dyn security::AdminGate;
pub type ArticleIdGeneratorPort = dyn util::ArticleIdGenerator;
