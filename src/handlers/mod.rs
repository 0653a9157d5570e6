pub mod auth;
pub mod places;
