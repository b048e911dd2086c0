use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing fqdn or querytype parameter")]
    MissingParameter,

    #[error("Invalid querytype parameter")]
    InvalidRecordType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("timeout waiting for response from {server}")]
    TransportTimeout { server: String },

    #[error("connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("I/O error: {0}")]
    TransportIo(String),

    #[error("invalid DNS response: {0}")]
    InvalidDnsResponse(String),
}

impl DomainError {
    /// Errors caused by the caller's input, detected before any network I/O.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingParameter | DomainError::InvalidRecordType(_)
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportIo(_)
        )
    }
}
