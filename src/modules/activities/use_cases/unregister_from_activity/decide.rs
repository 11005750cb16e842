use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decision::{
    DecideError, Decision,
};

pub fn decide_unregister(activity: &Activity, command: &UnregisterFromActivity) -> Decision {
    if !activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotSignedUp,
        };
    }

    Decision::Accepted {
        activity: activity.without_participant(&command.email),
    }
}
