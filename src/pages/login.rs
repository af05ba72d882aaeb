//! Login page: credential form plus the post-login destination.

use std::sync::Arc;

use crate::auth::models::LoginRequest;
use crate::common::{ApiError, ValidationResult};
use crate::session::SessionProvider;

use super::PageOutcome;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Path carried over from a guard redirect (`/login?redirect=...`).
    pub redirect: Option<String>,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        if self.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        }
        if self.password.is_empty() {
            result.add_error("password", "Password is required");
        }
        result
    }

    /// Where to go after a successful login. Only in-app paths are honored;
    /// anything else falls back to the home page.
    pub fn destination(&self) -> String {
        match self.redirect.as_deref().map(str::trim) {
            Some(path) if path.starts_with('/') => path.to_string(),
            _ => "/".to_string(),
        }
    }
}

pub struct LoginPage {
    session: Arc<SessionProvider>,
}

impl LoginPage {
    pub fn new(session: Arc<SessionProvider>) -> Self {
        Self { session }
    }

    pub async fn submit(&self, form: &LoginForm) -> Result<PageOutcome, ApiError> {
        form.validate().into_result()?;

        let credentials = LoginRequest {
            email: form.email.trim().to_string(),
            password: form.password.clone(),
        };
        self.session.login(&credentials).await?;
        Ok(PageOutcome::Redirect(form.destination()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_fields() {
        let form = LoginForm {
            email: " ".to_string(),
            password: String::new(),
            redirect: None,
        };
        let result = form.validate();
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn destination_defaults_to_home() {
        let form = LoginForm::default();
        assert_eq!(form.destination(), "/");
    }

    #[test]
    fn destination_honors_guard_redirect() {
        let form = LoginForm {
            redirect: Some("/my-stories".to_string()),
            ..LoginForm::default()
        };
        assert_eq!(form.destination(), "/my-stories");
    }

    #[test]
    fn destination_rejects_external_urls() {
        let form = LoginForm {
            redirect: Some("https://evil.example.com".to_string()),
            ..LoginForm::default()
        };
        assert_eq!(form.destination(), "/");
    }
}
