//! Account creation for the reader service.
//!
//! [`SignupService::create_user`] validates the request, optionally redeems a
//! group invite, persists the user/profile pair and default filters in one
//! transaction, then dispatches the confirmation email for pending signups.

pub mod create_user_input;
pub mod default_filters;
pub mod email;
pub mod error;
pub mod invite_check;
pub mod signup_service;
pub mod username_policy;

#[cfg(test)]
mod tests;

pub use create_user_input::CreateUserInput;
pub use default_filters::{DEFAULT_FILTERS, build_default_filters, create_default_filters};
pub use email::{
    ConfirmationEmailSender, DisabledEmailSender, LogEmailSender, sender_from_config,
};
pub use error::{Result, SignupError, SignupErrorCode};
pub use invite_check::{InviteCheck, validate_invite};
pub use signup_service::{SignupService, persist_signup};
pub use username_policy::UsernamePolicy;
