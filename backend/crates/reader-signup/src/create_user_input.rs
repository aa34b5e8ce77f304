use reader_core::AuthProvider;

/// Everything needed to create an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInput {
    pub provider: AuthProvider,
    /// Trimmed before use
    pub email: String,
    pub username: String,
    pub name: String,
    pub picture_url: Option<String>,
    pub bio: Option<String>,
    pub invite_code: Option<String>,
    /// Password hash, never plaintext
    pub password: Option<String>,
    /// Create the user as pending and send a confirmation email
    pub pending_confirmation: bool,
}

impl CreateUserInput {
    pub fn new(
        provider: AuthProvider,
        email: impl Into<String>,
        username: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            email: email.into(),
            username: username.into(),
            name: name.into(),
            picture_url: None,
            bio: None,
            invite_code: None,
            password: None,
            pending_confirmation: false,
        }
    }
}
