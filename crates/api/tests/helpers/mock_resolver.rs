use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsResolver;
use ferrous_lookup_domain::{AnswerRecord, DnsQuery, DnsResolution, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resolver stub returning a fixed outcome and counting calls.
pub struct MockDnsResolver {
    outcome: Result<Vec<AnswerRecord>, DomainError>,
    calls: AtomicUsize,
}

impl MockDnsResolver {
    pub fn with_answers(answers: Vec<AnswerRecord>) -> Self {
        Self {
            outcome: Ok(answers),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, _query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map(DnsResolution::new)
    }

    fn upstream(&self) -> String {
        "127.0.0.1:53".to_string()
    }
}
