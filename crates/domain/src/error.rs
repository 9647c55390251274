use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Store unreachable: {0}")]
    Connection(String),

    #[error("Schema setup failed: {0}")]
    Schema(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Unreadable image: {0}")]
    ImageDecode(String),

    #[error("Image encoding failed: {0}")]
    ImageEncode(String),

    #[error("Invalid plate: {0}")]
    InvalidPlate(String),

    #[error("Invalid operation: {0}")]
    Validation(String),
}

impl DomainError {
    /// True when the failure happened before the store changed anything
    /// because it could not be reached at all.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_human_readable() {
        let err = DomainError::Validation("sack count must be greater than zero".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid operation: sack count must be greater than zero"
        );
    }

    #[test]
    fn test_is_connection() {
        assert!(DomainError::Connection("refused".into()).is_connection());
        assert!(!DomainError::Query("syntax".into()).is_connection());
    }
}
