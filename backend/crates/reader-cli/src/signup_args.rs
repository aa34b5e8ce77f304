use crate::Result as CliErrorResult;

use reader_core::AuthProvider;
use reader_signup::CreateUserInput;

use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Email,
    Google,
    Apple,
}

impl ProviderArg {
    fn source(self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Google => "GOOGLE",
            Self::Apple => "APPLE",
        }
    }
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub username: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Pre-computed password hash (email signups)
    #[arg(long)]
    pub password_hash: Option<String>,

    #[arg(long)]
    pub invite_code: Option<String>,

    #[arg(long)]
    pub picture_url: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long, value_enum, default_value_t = ProviderArg::Email)]
    pub provider: ProviderArg,

    /// Account id at the OAuth provider (required for google/apple)
    #[arg(long)]
    pub source_user_id: Option<String>,

    /// Create the user as pending and send a confirmation email
    #[arg(long)]
    pub pending: bool,
}

impl SignupArgs {
    #[track_caller]
    pub fn into_input(self) -> CliErrorResult<CreateUserInput> {
        let provider = AuthProvider::from_parts(self.provider.source(), self.source_user_id)?;

        Ok(CreateUserInput {
            picture_url: self.picture_url,
            bio: self.bio,
            invite_code: self.invite_code,
            password: self.password_hash,
            pending_confirmation: self.pending,
            ..CreateUserInput::new(provider, self.email, self.username, self.name)
        })
    }
}
