use super::RecordType;
use std::sync::Arc;

/// Single-question DNS query, class IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// Always fully qualified (trailing root label).
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            domain: to_fqdn(domain).into(),
            record_type,
        }
    }
}

/// Appends the root label unless the name already ends with one.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
