pub mod admin;
pub mod cli;
pub mod commands;
pub mod error;
pub mod group_commands;
pub mod logger;
pub mod signup_args;
pub mod user_commands;


pub use admin::{CreatedGroup, UserDetails, create_group, generate_invite_code, show_user};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use group_commands::GroupCommands;
pub use signup_args::{ProviderArg, SignupArgs};
pub use user_commands::UserCommands;

pub const DEFAULT_INVITE_EXPIRY_DAYS: i64 = 7;
pub const MAX_INVITE_EXPIRY_DAYS: i64 = 3650;
