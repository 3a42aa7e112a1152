use crate::domain::admin::entity::AdminRecord;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Exact match on the stored address. No wildcard or CIDR matching.
    async fn find_by_ip(&self, ip: &str) -> DomainResult<Option<AdminRecord>>;
    async fn insert(&self, admin: &AdminRecord) -> DomainResult<bool>;
}
