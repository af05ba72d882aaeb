//! # Auth Module
//!
//! Account-facing functionality:
//! - registration, login, and password reset requests
//! - profile reads/updates and profile picture upload
//! - form validation rules shared by the auth pages

pub mod models;
pub mod service;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::User;
pub use service::AuthService;
