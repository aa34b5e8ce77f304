//! Confirmation email collaborator.
//!
//! Delivery itself lives outside this crate; signup only needs to know
//! whether the message was handed off.

use reader_config::EmailConfig;
use reader_core::User;

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

#[async_trait]
pub trait ConfirmationEmailSender: Send + Sync {
    /// Returns true when the confirmation email was dispatched.
    async fn send_confirmation_email(&self, user: &User) -> bool;
}

/// Records the dispatch in the log and reports success.
#[derive(Debug, Clone)]
pub struct LogEmailSender {
    from_address: String,
}

impl LogEmailSender {
    pub fn new(from_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
        }
    }
}

#[async_trait]
impl ConfirmationEmailSender for LogEmailSender {
    async fn send_confirmation_email(&self, user: &User) -> bool {
        info!(
            "Confirmation email for user {} queued: {} -> {}",
            user.id, self.from_address, user.email
        );
        true
    }
}

/// Used when email is turned off; every dispatch fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledEmailSender;

#[async_trait]
impl ConfirmationEmailSender for DisabledEmailSender {
    async fn send_confirmation_email(&self, user: &User) -> bool {
        warn!(
            "Email disabled, confirmation for user {} not sent",
            user.id
        );
        false
    }
}

pub fn sender_from_config(config: &EmailConfig) -> Arc<dyn ConfirmationEmailSender> {
    if config.enabled {
        Arc::new(LogEmailSender::new(config.from_address.clone()))
    } else {
        Arc::new(DisabledEmailSender)
    }
}
