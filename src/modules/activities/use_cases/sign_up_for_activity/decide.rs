use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::{
    DecideError, Decision,
};

pub fn decide_sign_up(activity: &Activity, command: &SignUpForActivity) -> Decision {
    if activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }

    Decision::Accepted {
        activity: activity.with_participant(&command.email),
    }
}
