//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Record addressed by an unknown identifier
    NotFound,
    /// The store rejected or failed a write
    Persistence(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Record not found"),
            DomainError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Every DbErr coming out of a write or commit path is a persistence failure.
// NotFound is never derived from a DbErr; it comes from explicit existence checks.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Persistence(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(DomainError::NotFound.to_string(), "Record not found");
        assert_eq!(
            DomainError::Persistence("disk full".to_string()).to_string(),
            "Persistence error: disk full"
        );
    }

    #[test]
    fn db_err_maps_to_persistence() {
        let err: DomainError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
