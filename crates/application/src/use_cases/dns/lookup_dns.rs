use crate::ports::DnsResolver;
use ferrous_lookup_domain::{DnsQuery, DnsResolution, DomainError, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Validates an untrusted `(fqdn, querytype)` pair and performs one upstream lookup.
pub struct LookupDnsUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupDnsUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Rejections happen before the resolver is touched; once the query is
    /// built, exactly one `resolve` call is made and its outcome returned as-is.
    pub async fn execute(
        &self,
        fqdn: Option<&str>,
        querytype: Option<&str>,
    ) -> Result<DnsResolution, DomainError> {
        let (fqdn, querytype) = match (non_empty(fqdn), non_empty(querytype)) {
            (Some(fqdn), Some(querytype)) => (fqdn, querytype),
            _ => {
                debug!("Rejecting lookup with missing parameter");
                return Err(DomainError::MissingParameter);
            }
        };

        let record_type = RecordType::from_mnemonic(querytype).ok_or_else(|| {
            debug!(querytype = %querytype, "Rejecting unknown record type");
            DomainError::InvalidRecordType(querytype.to_string())
        })?;

        let query = DnsQuery::new(fqdn, record_type);
        let start = Instant::now();

        match self.resolver.resolve(&query).await {
            Ok(resolution) => {
                info!(
                    domain = %query.domain,
                    record_type = %record_type,
                    rcode = resolution.response_code,
                    protocol = resolution.protocol_used,
                    answers = resolution.answers.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Lookup completed"
                );
                Ok(resolution)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %record_type,
                    upstream = %self.resolver.upstream(),
                    transport = e.is_transport_error(),
                    error = %e,
                    "Lookup failed"
                );
                Err(e)
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
