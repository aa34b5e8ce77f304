use crate::{DEFAULT_INVITE_EXPIRY_DAYS, MAX_INVITE_EXPIRY_DAYS};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a group and an invite code for it
    Create {
        /// Group name
        #[arg(long)]
        name: String,

        /// Email of the existing user who owns the group
        #[arg(long)]
        creator_email: String,

        /// How many users may join through the invite
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i64).range(1..))]
        max_members: i64,

        /// Days until the invite expires (at most ten years)
        #[arg(
            long,
            default_value_t = DEFAULT_INVITE_EXPIRY_DAYS,
            value_parser = clap::value_parser!(i64).range(1..=MAX_INVITE_EXPIRY_DAYS)
        )]
        expires_in_days: i64,
    },
}
