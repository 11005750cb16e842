use crate::modules::activities::adapters::outbound::activity_repository_in_memory::InMemoryActivityRepository;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryActivityRepository>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryActivityRepository>>,
}

impl AppState {
    /// Wires every use case against the same in memory repository.
    pub fn in_memory(repository: Arc<InMemoryActivityRepository>) -> Self {
        Self {
            queries: repository.clone(),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(repository.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(repository)),
        }
    }
}
