use crate::{group_commands::GroupCommands, signup_args::SignupArgs, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account (or finish one that has no profile yet)
    Signup(SignupArgs),

    /// Group and invite administration
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },

    /// User administration
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
