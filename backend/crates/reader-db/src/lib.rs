pub mod connection;
pub mod error;
pub mod repositories;

mod conversions;

pub use connection::pool::{create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::filter_repository::FilterRepository;
pub use repositories::group_membership_repository::GroupMembershipRepository;
pub use repositories::group_repository::GroupRepository;
pub use repositories::invite_repository::InviteRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;
