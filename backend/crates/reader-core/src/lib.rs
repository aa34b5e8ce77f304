pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::auth_provider::AuthProvider;
pub use models::filter::{DEFAULT_FILTER_CATEGORY, Filter};
pub use models::group::Group;
pub use models::group_membership::GroupMembership;
pub use models::invite::{Invite, InviteWithGroup};
pub use models::profile::Profile;
pub use models::user::{User, UserWithProfile, normalize_email};
pub use models::user_status::UserStatus;
