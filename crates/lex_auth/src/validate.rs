//! Credential form validation.
//!
//! All fields are checked at once and every violation is reported per field,
//! mirroring the behavior of the original web forms.

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// A validation failure attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Signup form input.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate a login form. Empty result means the form is valid.
pub fn validate_login(username: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if username.trim().is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    }
    if password.trim().is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    errors
}

/// Validate a signup form. Empty result means the form is valid.
pub fn validate_signup(form: &SignupForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let username = form.username.trim();
    if username.is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    } else if username.len() < 3 {
        errors.push(FieldError::new(
            "username",
            "Username must be at least 3 characters",
        ));
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address",
        ));
    }

    let password = form.password.trim();
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if password.len() < 6 {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }

    let confirm = form.confirm_password.trim();
    if confirm.is_empty() {
        errors.push(FieldError::new(
            "confirm_password",
            "Please confirm your password",
        ));
    } else if password != confirm {
        errors.push(FieldError::new("confirm_password", "Passwords do not match"));
    }

    errors
}

fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login("  ", "");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "username");
        assert_eq!(errors[1].field, "password");

        assert!(validate_login("alice", "secret").is_empty());
    }

    #[test]
    fn test_signup_username_rules() {
        let mut form = SignupForm {
            username: "al".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Username must be at least 3 characters");

        form.username = "alice".to_string();
        assert!(validate_signup(&form).is_empty());
    }

    #[test]
    fn test_signup_email_rules() {
        let form = SignupForm {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_signup_password_rules() {
        let form = SignupForm {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
            confirm_password: "different".to_string(),
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Password must be at least 6 characters");
        assert_eq!(errors[1].message, "Passwords do not match");
    }

    #[test]
    fn test_signup_reports_all_fields_at_once() {
        let errors = validate_signup(&SignupForm::default());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("user@domain.com"));
        assert!(is_valid_email("a.b@c.co"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user domain@x.com"));
        assert!(!is_valid_email("@domain.com"));
    }
}
