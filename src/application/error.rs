// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    /// True when a document record lacked the expected front matter shape.
    #[must_use]
    pub const fn is_access(&self) -> bool {
        matches!(self, Self::Domain(DomainError::Access(_)))
    }
}
