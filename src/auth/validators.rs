// src/auth/validators.rs

use crate::common::{ValidationResult, Validator};

use super::models::RegisterRequest;

pub const MIN_PASSWORD_LENGTH: usize = 6;

// ============================================================================
// Registration Validator
// ============================================================================

pub struct RegistrationValidator;

impl Validator<RegisterRequest> for RegistrationValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.username.trim().is_empty() {
            result.add_error("username", "Username is required");
        }

        if !is_plausible_email(&data.email) {
            result.add_error("email", "Please enter a valid email address");
        }

        validate_new_password(&data.password, &mut result);

        result
    }
}

/// Shared password rule for signup, account changes, and password reset.
pub fn validate_new_password(password: &str, result: &mut ValidationResult) {
    if password.len() < MIN_PASSWORD_LENGTH {
        result.add_error(
            "password",
            "New password must be at least 6 characters long",
        );
    }
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
