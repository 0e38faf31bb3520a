use dnstrace_application::use_cases::TraceLookupUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<TraceLookupUseCase>,
}
