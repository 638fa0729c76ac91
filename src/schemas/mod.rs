pub mod auth;
pub mod blog;
pub mod claims;
pub mod user;
