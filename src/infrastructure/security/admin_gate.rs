use crate::application::{dto::CallerOrigin, ports::security::AdminGate};
use crate::domain::admin::AdminRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Admin gate backed by stored [`AdminRecord`](crate::domain::admin::AdminRecord)s.
///
/// A failed lookup counts as "not an admin": the request continues with
/// anonymous privileges instead of being rejected outright.
pub struct RepositoryAdminGate {
    repo: Arc<dyn AdminRepository>,
}

impl RepositoryAdminGate {
    pub fn new(repo: Arc<dyn AdminRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AdminGate for RepositoryAdminGate {
    async fn is_admin(&self, origin: &CallerOrigin) -> bool {
        match self.repo.find_by_ip(origin.as_str()).await {
            Ok(record) => record.is_some(),
            Err(err) => {
                tracing::warn!(origin = %origin, error = %err, "admin lookup failed, treating caller as non-admin");
                false
            }
        }
    }
}
