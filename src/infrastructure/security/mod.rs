// src/infrastructure/security/mod.rs
pub mod admin_gate;

pub use admin_gate::RepositoryAdminGate;
