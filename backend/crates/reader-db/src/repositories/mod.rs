pub mod filter_repository;
pub mod group_membership_repository;
pub mod group_repository;
pub mod invite_repository;
pub mod profile_repository;
pub mod user_repository;
