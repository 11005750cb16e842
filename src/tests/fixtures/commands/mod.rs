pub mod sign_up_for_activity;
pub mod unregister_from_activity;
