mod lookup_dns;

pub use lookup_dns::LookupDnsUseCase;
