use crate::modules::activities::adapters::outbound::activity_repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("activity not found: {0}")]
    NotFound(String),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
