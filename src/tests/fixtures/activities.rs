// Shared test fixture for activity records.

use crate::modules::activities::core::activity::Activity;

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec!["michael@mergington.edu".to_string()],
            },
        }
    }

    pub fn participants(mut self, v: Vec<&str>) -> Self {
        self.inner.participants = v.into_iter().map(String::from).collect();
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}
