pub mod dns;

pub use dns::LookupDnsUseCase;
