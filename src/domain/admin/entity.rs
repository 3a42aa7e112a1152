use crate::domain::errors::{DomainError, DomainResult};

/// A trusted network origin. Having a record is all it takes to be an admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRecord {
    pub id: String,
    pub ip: String,
}

impl AdminRecord {
    pub fn new(id: impl Into<String>, ip: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        let ip = ip.into();
        if id.trim().is_empty() {
            return Err(DomainError::Validation("admin id cannot be empty".into()));
        }
        if ip.trim().is_empty() {
            return Err(DomainError::Validation("admin ip cannot be empty".into()));
        }
        Ok(Self { id, ip })
    }
}
