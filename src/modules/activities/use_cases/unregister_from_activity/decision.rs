use crate::modules::activities::core::activity::Activity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { activity: Activity },
    Rejected { reason: DecideError },
}
