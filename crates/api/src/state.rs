use ferrous_lookup_application::use_cases::LookupDnsUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupDnsUseCase>,
}
