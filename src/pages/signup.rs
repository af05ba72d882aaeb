//! Signup page: registration form with confirm-password matching.

use std::sync::Arc;

use crate::auth::models::RegisterRequest;
use crate::auth::validators::RegistrationValidator;
use crate::common::{ApiError, ValidationResult, Validator};
use crate::session::SessionProvider;

use super::PageOutcome;

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = RegistrationValidator.validate(&self.to_request());
        if self.password != self.confirm_password {
            result.add_error("confirmPassword", "Passwords do not match");
        }
        result
    }
}

pub struct SignupPage {
    session: Arc<SessionProvider>,
}

impl SignupPage {
    pub fn new(session: Arc<SessionProvider>) -> Self {
        Self { session }
    }

    pub async fn submit(&self, form: &SignupForm) -> Result<PageOutcome, ApiError> {
        form.validate().into_result()?;
        self.session.register(&form.to_request()).await?;
        Ok(PageOutcome::Redirect("/".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            username: "nia".to_string(),
            email: "nia@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        }
    }

    #[test]
    fn accepts_matching_passwords() {
        assert!(valid_form().validate().is_valid());
    }

    #[test]
    fn rejects_password_mismatch() {
        let form = SignupForm {
            confirm_password: "hunter23".to_string(),
            ..valid_form()
        };
        let result = form.validate();
        assert!(!result.is_valid());
        assert!(result.messages().contains(&"Passwords do not match".to_string()));
    }

    #[test]
    fn rejects_short_password() {
        let form = SignupForm {
            password: "five5".to_string(),
            confirm_password: "five5".to_string(),
            ..valid_form()
        };
        let result = form.validate();
        assert_eq!(
            result.messages()[0],
            "New password must be at least 6 characters long"
        );
    }
}
