use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// An upstream service failed: transport error, timeout, unexpected
    /// status or an undecodable body. A report 404 is not one of these.
    #[error("Upstream error: {service} - {message}")]
    Upstream { service: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            service: service.into(),
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

    /// Whether the error came from one of the upstream services
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error() {
        let error = DomainError::upstream("reports", "HTTP 500 Internal Server Error");
        assert_eq!(
            error.to_string(),
            "Upstream error: reports - HTTP 500 Internal Server Error"
        );
        assert!(error.is_upstream());
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Invalid CORS origin");
        assert_eq!(error.to_string(), "Configuration error: Invalid CORS origin");
        assert!(!error.is_upstream());
    }

    #[test]
    fn test_internal_error() {
        let error = DomainError::internal("boom");
        assert_eq!(error.to_string(), "Internal error: boom");
    }
}
