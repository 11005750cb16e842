use crate::modules::activities::adapters::outbound::activity_repository::ActivityRepository;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use crate::modules::activities::use_cases::unregister_from_activity::decision::Decision;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TRepository>
where
    TRepository: ActivityRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UnregisterFromActivityHandler<TRepository>
where
    TRepository: ActivityRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self), fields(activity = %command.activity_name))]
    pub async fn handle(&self, command: UnregisterFromActivity) -> Result<(), ApplicationError> {
        let outcome = self
            .repository
            .update(&command.activity_name, |activity| {
                match decide_unregister(activity, &command) {
                    Decision::Accepted { activity } => Ok(activity),
                    Decision::Rejected { reason } => Err(reason),
                }
            })
            .await?;

        match outcome {
            None => Err(ApplicationError::NotFound(command.activity_name)),
            Some(Ok(())) => {
                tracing::info!(email = %command.email, "participant unregistered");
                Ok(())
            }
            Some(Err(reason)) => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
