use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Mark a pending user as active
    Confirm {
        /// User ID (UUID)
        id: Uuid,
    },
    /// Show a user with profile and filters
    Show {
        /// Email address (case-insensitive)
        email: String,
    },
}
