use crate::modules::activities::adapters::outbound::activity_repository::ActivityRepository;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::Decision;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TRepository>
where
    TRepository: ActivityRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> SignUpForActivityHandler<TRepository>
where
    TRepository: ActivityRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self), fields(activity = %command.activity_name))]
    pub async fn handle(&self, command: SignUpForActivity) -> Result<(), ApplicationError> {
        let outcome = self
            .repository
            .update(&command.activity_name, |activity| {
                match decide_sign_up(activity, &command) {
                    Decision::Accepted { activity } => Ok(activity),
                    Decision::Rejected { reason } => Err(reason),
                }
            })
            .await?;

        match outcome {
            None => Err(ApplicationError::NotFound(command.activity_name)),
            Some(Ok(())) => {
                tracing::info!(email = %command.email, "participant signed up");
                Ok(())
            }
            Some(Err(reason)) => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
