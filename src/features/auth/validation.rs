//! Client-side form validation. Failures are reported per field and never
//! reach the network; the server still performs its own checks.

use crate::features::auth::types::{
    ACTIVATION_CODE_LENGTH, ActivationCode, Credentials, RegistrationDraft,
};
use regex::Regex;

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Code,
}

/// Field-scoped validation messages, in the order they were found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, String)>);

impl FieldErrors {
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.push(Field::Email, "Email is required.");
    } else if !is_valid_email(email) {
        errors.push(Field::Email, "Email address looks invalid.");
    }
}

/// Validates the login form and returns the normalized credentials.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let email = email.trim();
    let mut errors = FieldErrors::default();

    check_email(&mut errors, email);
    if password.trim().is_empty() {
        errors.push(Field::Password, "Password is required.");
    }

    errors.into_result(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Validates the first register step and returns a trimmed draft.
pub fn validate_registration(input: &RegistrationDraft) -> Result<RegistrationDraft, FieldErrors> {
    let firstname = input.firstname.trim();
    let lastname = input.lastname.trim();
    let email = input.email.trim();
    let mut errors = FieldErrors::default();

    if firstname.is_empty() {
        errors.push(Field::FirstName, "First name is required.");
    }
    if lastname.is_empty() {
        errors.push(Field::LastName, "Last name is required.");
    }
    check_email(&mut errors, email);

    if input.password.trim().is_empty() {
        errors.push(Field::Password, "Password is required.");
    } else if input.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(
            Field::Password,
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters."),
        );
    }

    if input.confirm_password.is_empty() {
        errors.push(Field::ConfirmPassword, "Please confirm your password.");
    } else if input.confirm_password != input.password {
        errors.push(Field::ConfirmPassword, "Passwords do not match.");
    }

    errors.into_result(RegistrationDraft {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        email: email.to_string(),
        password: input.password.clone(),
        confirm_password: input.confirm_password.clone(),
    })
}

/// Validates the emailed activation code: six ASCII letters or digits.
pub fn validate_activation_code(raw: &str) -> Result<ActivationCode, FieldErrors> {
    let code = raw.trim();
    let mut errors = FieldErrors::default();

    if code.chars().count() != ACTIVATION_CODE_LENGTH {
        errors.push(
            Field::Code,
            format!("Enter the {ACTIVATION_CODE_LENGTH}-character code from your email."),
        );
    } else if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.push(Field::Code, "The code may only contain letters and digits.");
    }

    errors.into_result(ActivationCode::new(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            firstname: " Ada ".to_string(),
            lastname: "Lovelace".to_string(),
            email: " ada@example.com ".to_string(),
            password: "engine-one".to_string(),
            confirm_password: "engine-one".to_string(),
        }
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("two words@example.com"));
    }

    #[test]
    fn login_accepts_short_passwords() {
        let credentials = validate_login(" a@b.com ", "x").expect("valid login");
        assert_eq!(credentials.email, "a@b.com");
        assert_eq!(credentials.password, "x");
    }

    #[test]
    fn login_reports_each_field() {
        let errors = validate_login("not-an-email", "   ").expect_err("invalid login");
        assert_eq!(errors.get(Field::Email), Some("Email address looks invalid."));
        assert_eq!(errors.get(Field::Password), Some("Password is required."));
        let mut expected = FieldErrors::default();
        expected.push(Field::Email, "Email address looks invalid.");
        expected.push(Field::Password, "Password is required.");
        assert_eq!(errors, expected);

        let errors = validate_login("", "secret").expect_err("missing email");
        assert_eq!(errors.get(Field::Email), Some("Email is required."));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn registration_trims_profile_fields() {
        let valid = validate_registration(&draft()).expect("valid draft");
        assert_eq!(valid.firstname, "Ada");
        assert_eq!(valid.email, "ada@example.com");
        assert_eq!(valid.password, "engine-one");
    }

    #[test]
    fn registration_requires_names() {
        let input = RegistrationDraft {
            firstname: "  ".to_string(),
            lastname: String::new(),
            ..draft()
        };
        let errors = validate_registration(&input).expect_err("names missing");
        assert!(errors.get(Field::FirstName).is_some());
        assert!(errors.get(Field::LastName).is_some());
        assert!(errors.get(Field::Email).is_none());
    }

    #[test]
    fn registration_enforces_password_policy() {
        let input = RegistrationDraft {
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            ..draft()
        };
        let errors = validate_registration(&input).expect_err("short password");
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 8 characters.")
        );
    }

    #[test]
    fn registration_requires_matching_confirmation() {
        let input = RegistrationDraft {
            confirm_password: "engine-two".to_string(),
            ..draft()
        };
        let errors = validate_registration(&input).expect_err("mismatch");
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Passwords do not match.")
        );
        let mut expected = FieldErrors::default();
        expected.push(Field::ConfirmPassword, "Passwords do not match.");
        assert_eq!(errors, expected);
    }

    #[test]
    fn activation_code_must_be_six_alphanumerics() {
        assert_eq!(
            validate_activation_code(" 482913 ")
                .expect("valid code")
                .as_str(),
            "482913"
        );
        assert!(validate_activation_code("A1B2C3").is_ok());
        assert!(validate_activation_code("48291").is_err());
        assert!(validate_activation_code("4829134").is_err());

        let errors = validate_activation_code("48-913").expect_err("symbol");
        assert_eq!(
            errors.get(Field::Code),
            Some("The code may only contain letters and digits.")
        );
    }
}
