use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsResolver;
use ferrous_lookup_domain::{AnswerRecord, DnsQuery, DnsResolution, DomainError};
use std::sync::Mutex;

pub struct MockDnsResolver {
    response: Mutex<Result<DnsResolution, DomainError>>,
    queries: Mutex<Vec<DnsQuery>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::with_answers(vec![])
    }

    pub fn with_answers(answers: Vec<AnswerRecord>) -> Self {
        Self {
            response: Mutex::new(Ok(DnsResolution::new(answers))),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<DnsQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.queries.lock().unwrap().push(query.clone());
        self.response.lock().unwrap().clone()
    }

    fn upstream(&self) -> String {
        "mock".to_string()
    }
}
