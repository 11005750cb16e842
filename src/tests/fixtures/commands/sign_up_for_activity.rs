// Shared test fixture for the SignUpForActivity command.

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub struct SignUpForActivityBuilder {
    inner: SignUpForActivity,
}

impl Default for SignUpForActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpForActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUpForActivity {
                activity_name: "Tennis Team".to_string(),
                email: "newstudent@mergington.edu".to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> SignUpForActivity {
        self.inner
    }
}

#[cfg(test)]
mod sign_up_for_activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = SignUpForActivityBuilder::default().build();
        assert_eq!(built.activity_name, "Tennis Team");
        assert_eq!(built.email, "newstudent@mergington.edu");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = SignUpForActivityBuilder::new()
            .activity_name("Art Club")
            .email("tester@mergington.edu")
            .build();
        assert_eq!(custom.activity_name, "Art Club");
        assert_eq!(custom.email, "tester@mergington.edu");
    }
}
