//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config};
pub use dns_query::{to_fqdn, DnsQuery};
pub use dns_record::{AnswerRecord, DnsResolution, RecordType};
pub use errors::DomainError;
