//! Registration form policy enforcement.

use careerhub_core::config::SessionConfig;
use careerhub_core::error::AppError;
use careerhub_entity::user::{Credentials, Registration};

/// Validates registration and login forms against configured policies.
#[derive(Debug, Clone)]
pub struct RegistrationValidator {
    /// Minimum password length.
    min_length: usize,
}

impl RegistrationValidator {
    /// Creates a new validator from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a registration form.
    ///
    /// Returns the first violation found.
    pub fn validate(&self, registration: &Registration) -> Result<(), AppError> {
        if registration.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }

        validate_email(&registration.email)?;

        if registration.password != registration.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }

        if registration.password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        Ok(())
    }

    /// Validates a login form.
    pub fn validate_credentials(&self, credentials: &Credentials) -> Result<(), AppError> {
        validate_email(&credentials.email)?;
        if credentials.password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::validation(format!("Invalid email address: '{email}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: &str, confirm: &str) -> Registration {
        Registration {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_mismatched_confirmation() {
        let validator = RegistrationValidator::new(&SessionConfig::default());
        let err = validator
            .validate(&registration("secret1", "secret2"))
            .unwrap_err();
        assert_eq!(err.message, "Passwords do not match");
    }

    #[test]
    fn test_min_length() {
        let validator = RegistrationValidator::new(&SessionConfig::default());
        assert!(validator.validate(&registration("abc", "abc")).is_err());
        assert!(validator.validate(&registration("abcdef", "abcdef")).is_ok());
    }

    #[test]
    fn test_email_shape() {
        let validator = RegistrationValidator::new(&SessionConfig::default());
        let creds = Credentials {
            email: "not-an-email".into(),
            password: "x".into(),
        };
        assert!(validator.validate_credentials(&creds).is_err());
    }
}
