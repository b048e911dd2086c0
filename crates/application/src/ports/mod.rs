mod dns_resolver;

pub use dns_resolver::DnsResolver;

// Re-export for convenience
pub use ferrous_lookup_domain::{DnsQuery, DnsResolution};
