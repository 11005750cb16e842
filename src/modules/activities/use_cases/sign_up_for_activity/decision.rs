use crate::modules::activities::core::activity::Activity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is already signed up")]
    AlreadySignedUp,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { activity: Activity },
    Rejected { reason: DecideError },
}
