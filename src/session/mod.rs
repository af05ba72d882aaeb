//! # Session Module
//!
//! The client-held proof of authentication: a token plus the cached user,
//! persisted as a pair, and the guard that keeps protected pages behind it.

pub mod guard;
pub mod provider;
pub mod store;


pub use guard::{GuardDecision, RouteGuard};
pub use provider::SessionProvider;
pub use store::SessionStore;
