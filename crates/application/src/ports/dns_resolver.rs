use async_trait::async_trait;
use ferrous_lookup_domain::{DnsQuery, DnsResolution, DomainError};

/// Performs exactly one exchange with an upstream resolver per call.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;

    /// Human-readable upstream identity, used for logging.
    fn upstream(&self) -> String;
}
