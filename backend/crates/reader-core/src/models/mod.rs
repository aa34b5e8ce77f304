pub mod auth_provider;
pub mod filter;
pub mod group;
pub mod group_membership;
pub mod invite;
pub mod profile;
pub mod user;
pub mod user_status;
