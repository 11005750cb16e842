use serde::{Deserialize, Serialize};

/// An extracurricular offering and its roster of participant emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Returns a copy with `email` appended. Callers check membership first.
    pub fn with_participant(&self, email: &str) -> Self {
        let mut next = self.clone();
        next.participants.push(email.to_string());
        next
    }

    pub fn without_participant(&self, email: &str) -> Self {
        let mut next = self.clone();
        next.participants.retain(|p| p != email);
        next
    }
}
