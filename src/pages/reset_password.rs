//! Password recovery pages: requesting a reset email and completing the
//! reset with an emailed token.

use std::sync::Arc;

use crate::auth::validators::validate_new_password;
use crate::auth::AuthService;
use crate::common::{ApiError, ValidationResult};

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        if self.token.trim().is_empty() {
            result.add_error("token", "Reset token is required");
        }
        validate_new_password(&self.new_password, &mut result);
        if self.new_password != self.confirm_password {
            result.add_error("confirmPassword", "Passwords do not match");
        }
        result
    }
}

pub struct ResetPasswordPage {
    auth: Arc<AuthService>,
}

impl ResetPasswordPage {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }

    /// Requests a reset email. The returned message is server-phrased and
    /// intentionally does not reveal whether the address exists.
    pub async fn request_reset(&self, email: &str) -> Result<String, ApiError> {
        if email.trim().is_empty() {
            return Err(ApiError::Validation("Email is required".to_string()));
        }
        self.auth.forgot_password(email).await
    }

    /// Completes the reset with the emailed token; the caller should send the
    /// user back to the login page on success.
    pub async fn complete(&self, form: &ResetPasswordForm) -> Result<String, ApiError> {
        form.validate().into_result()?;
        self.auth
            .reset_password(form.token.trim(), &form.new_password)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_token() {
        let form = ResetPasswordForm {
            token: "  ".to_string(),
            new_password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        };
        let result = form.validate();
        assert!(result.errors().iter().any(|e| e.field == "token"));
    }

    #[test]
    fn enforces_password_rules() {
        let form = ResetPasswordForm {
            token: "tok".to_string(),
            new_password: "five5".to_string(),
            confirm_password: "five5".to_string(),
        };
        assert_eq!(
            form.validate().messages()[0],
            "New password must be at least 6 characters long"
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let form = ResetPasswordForm {
            token: "tok".to_string(),
            new_password: "hunter22".to_string(),
            confirm_password: "hunter23".to_string(),
        };
        assert!(form
            .validate()
            .messages()
            .contains(&"Passwords do not match".to_string()));
    }
}
