//! Route guard for pages that require authentication.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::models::User;
use crate::common::RetryPolicy;

use super::provider::SessionProvider;

/// Outcome of guarding a protected path.
#[derive(Debug)]
pub enum GuardDecision {
    /// Session resolved; render the protected page for this user.
    Allow(User),
    /// Not authenticated; send to login, preserving the intended path.
    Redirect { to: String, from: String },
    /// Authenticated but the user object never materialized; surface a
    /// retry / re-login affordance.
    Degraded { message: String },
}

pub struct RouteGuard {
    session: Arc<SessionProvider>,
    policy: RetryPolicy,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionProvider>) -> Self {
        Self::with_policy(session, RetryPolicy::default())
    }

    pub fn with_policy(session: Arc<SessionProvider>, policy: RetryPolicy) -> Self {
        Self { session, policy }
    }

    pub async fn authorize(&self, path: &str) -> GuardDecision {
        if !self.session.is_authenticated() {
            let to = format!("/login?redirect={}", urlencoding::encode(path));
            debug!(from = %path, "unauthenticated visit, redirecting to login");
            return GuardDecision::Redirect {
                to,
                from: path.to_string(),
            };
        }

        if let Some(user) = self.session.current_user() {
            return GuardDecision::Allow(user);
        }

        // Credentials exist but no materialized user: bounded refresh.
        let refreshed = self
            .policy
            .run(|attempt| {
                debug!(attempt, path = %path, "refreshing user data");
                self.session.refresh_user()
            })
            .await;

        match refreshed {
            Ok(user) => GuardDecision::Allow(user),
            Err(err) => {
                warn!(error = %err, path = %path, "user data refresh exhausted retries");
                GuardDecision::Degraded {
                    message: "Failed to load user data. Please try logging in again.".to_string(),
                }
            }
        }
    }
}
