mod auth_provider;
mod invite;
mod user_status;
mod user;
