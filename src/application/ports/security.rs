// src/application/ports/security.rs
use crate::application::dto::CallerOrigin;
use async_trait::async_trait;

/// Decides whether a caller's network origin is trusted with admin operations.
///
/// The answer is binary; there are no scoped privileges. Implementations
/// must look the origin up afresh on every call.
#[async_trait]
pub trait AdminGate: Send + Sync {
    async fn is_admin(&self, origin: &CallerOrigin) -> bool;
}
