use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Whether the failure originates in a dependency rather than the caller's input
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::Internal { .. } | Self::Storage { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Account '7' not found");
        assert_eq!(error.to_string(), "Not found: Account '7' not found");
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("connection reset");
        assert_eq!(error.to_string(), "Storage error: connection reset");
    }

    #[test]
    fn test_server_fault_classification() {
        assert!(DomainError::storage("x").is_server_fault());
        assert!(DomainError::internal("x").is_server_fault());
        assert!(DomainError::configuration("x").is_server_fault());
        assert!(!DomainError::validation("x").is_server_fault());
        assert!(!DomainError::not_found("x").is_server_fault());
    }
}
