// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Store failures. Domain validation failures become [`Self::Validation`].
    #[error(transparent)]
    Domain(DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The store declined an otherwise valid write.
    #[error("not persisted: {0}")]
    NotPersisted(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_persisted(msg: impl Into<String>) -> Self {
        Self::NotPersisted(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            other @ DomainError::Persistence(_) => Self::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_is_an_application_validation_error() {
        let err = ApplicationError::from(DomainError::Validation("title cannot be empty".into()));
        assert!(matches!(err, ApplicationError::Validation(msg) if msg == "title cannot be empty"));
    }

    #[test]
    fn store_failures_stay_domain_errors() {
        let err = ApplicationError::from(DomainError::Persistence("disk full".into()));
        assert!(matches!(err, ApplicationError::Domain(DomainError::Persistence(_))));
    }
}
