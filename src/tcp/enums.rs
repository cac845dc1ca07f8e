/// LOGIN exchange states.
pub mod login_state;
