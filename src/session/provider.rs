//! The session provider: the single owner of authentication state.
//!
//! Constructed once in `main` and handed by `Arc` to everything that needs
//! it; there is no ambient global. All mutation of the persisted session
//! flows through here, pages only read snapshots.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::auth::models::{
    LoginRequest, RegisterRequest, UpdateProfileRequest, User,
};
use crate::auth::AuthService;
use crate::common::{safe_email_log, ApiError};

use super::store::SessionStore;

pub struct SessionProvider {
    store: Arc<SessionStore>,
    auth: Arc<AuthService>,
    /// User object materialized for this run (loaded or revalidated).
    current: RwLock<Option<User>>,
}

impl SessionProvider {
    pub fn new(store: Arc<SessionStore>, auth: Arc<AuthService>) -> Self {
        Self {
            store,
            auth,
            current: RwLock::new(None),
        }
    }

    /// Restores the persisted session and re-validates it against the
    /// profile endpoint. Auth failures and malformed responses clear the
    /// session; a network failure keeps the cached user so the app stays
    /// usable offline-ish.
    pub async fn initialize(&self) -> Result<(), ApiError> {
        let Some(persisted) = self.store.load() else {
            return Ok(());
        };

        match self.auth.get_profile().await {
            Ok(user) => {
                if let Err(err) = self.store.update_user(&user) {
                    warn!(error = %err, "failed to refresh persisted user");
                }
                info!(email = %safe_email_log(&user.email), "session revalidated");
                self.set_current(Some(user));
                Ok(())
            }
            Err(err) if err.is_auth_failure() || matches!(err, ApiError::Unexpected(_)) => {
                info!(error = %err, "stored session rejected, clearing");
                self.store.clear();
                self.set_current(None);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "profile revalidation unreachable, keeping cached user");
                self.set_current(Some(persisted.user));
                Ok(())
            }
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let payload = self.auth.register(request).await?;
        self.persist(&payload.token, &payload.user)?;
        Ok(payload.user)
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        let payload = self.auth.login(credentials).await?;
        self.persist(&payload.token, &payload.user)?;
        Ok(payload.user)
    }

    /// Clears persisted and in-memory state. Synchronous, no network path.
    pub fn logout(&self) {
        self.store.clear();
        self.set_current(None);
        info!("logged out");
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, ApiError> {
        let user = self.auth.update_profile(request).await?;
        if let Err(err) = self.store.update_user(&user) {
            warn!(error = %err, "failed to persist updated profile");
        }
        self.set_current(Some(user.clone()));
        Ok(user)
    }

    /// Uploads a new profile picture; the image is validated (type, size)
    /// before any network call happens inside the auth service.
    pub async fn update_profile_picture(
        &self,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<String, ApiError> {
        let response = self.auth.upload_profile_picture(filename, image).await?;

        if let Some(mut user) = self.current_user() {
            user.profile_picture = Some(response.profile_picture.clone());
            if let Err(err) = self.store.update_user(&user) {
                warn!(error = %err, "failed to persist updated picture");
            }
            self.set_current(Some(user));
        }
        Ok(response.profile_picture)
    }

    /// Re-fetches the profile to materialize the user object. Used by the
    /// route guard's bounded retry.
    pub async fn refresh_user(&self) -> Result<User, ApiError> {
        let user = self.auth.get_profile().await?;
        self.set_current(Some(user.clone()));
        Ok(user)
    }

    /// Authenticated iff both token and user are persisted and well-formed.
    pub fn is_authenticated(&self) -> bool {
        self.store.has_credentials()
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    fn persist(&self, token: &str, user: &User) -> Result<(), ApiError> {
        self.store
            .save(token, user)
            .map_err(|err| {
                warn!(error = %err, "failed to persist session");
                ApiError::Unexpected("Failed to persist session".to_string())
            })?;
        self.set_current(Some(user.clone()));
        Ok(())
    }

    fn set_current(&self, value: Option<User>) {
        if let Ok(mut guard) = self.current.write() {
            *guard = value;
        }
    }
}
