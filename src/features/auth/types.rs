//! Request payloads and session types for the auth flows. Credentials and
//! registration drafts carry passwords, so their `Debug` output is redacted and
//! they must never be logged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the emailed activation code.
pub const ACTIVATION_CODE_LENGTH: usize = 6;

const REDACTED: &str = "<redacted>";

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Register request body; the API expects `confirmPassword` in camelCase.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for RegistrationDraft {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegistrationDraft")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("confirm_password", &REDACTED)
            .finish()
    }
}

/// A validated activation code. Construct through
/// [`validate_activation_code`](super::validation::validate_activation_code).
#[derive(Clone, PartialEq, Eq)]
pub struct ActivationCode(String);

impl ActivationCode {
    pub(super) fn new(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ActivationCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ActivationCode").field(&REDACTED).finish()
    }
}

/// Federated identity providers offered on the landing screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInProvider {
    Google,
    Github,
}

impl SignInProvider {
    pub const ALL: [SignInProvider; 2] = [SignInProvider::Google, SignInProvider::Github];

    /// Identifier understood by the session provider.
    pub fn id(self) -> &'static str {
        match self {
            SignInProvider::Google => "google",
            SignInProvider::Github => "github",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SignInProvider::Google => "Sign up with Google",
            SignInProvider::Github => "Sign up with Github",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Session summary returned by the session provider. Only its presence gates
/// the app; the fields are shown as-is and carry no secrets.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub expires: Option<String>,
}

impl Session {
    /// Providers answer `{}` for anonymous visitors; that is not a session.
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.expires.is_none()
    }

    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        user.name.as_deref().or(user.email.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn registration_draft_uses_api_field_names() -> Result<()> {
        let draft = RegistrationDraft {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine-one".to_string(),
            confirm_password: "engine-one".to_string(),
        };

        let json = serde_json::to_value(&draft)?;
        assert_eq!(json["firstname"], "Ada");
        assert_eq!(json["lastname"], "Lovelace");
        assert_eq!(json["confirmPassword"], "engine-one");
        assert!(json.get("confirm_password").is_none());
        Ok(())
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "hunter22".to_string(),
        };
        let draft = RegistrationDraft {
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            ..RegistrationDraft::default()
        };
        let code = ActivationCode::new("482913".to_string());

        for rendered in [
            format!("{credentials:?}"),
            format!("{draft:?}"),
            format!("{code:?}"),
        ] {
            assert!(!rendered.contains("hunter22"), "{rendered}");
            assert!(!rendered.contains("482913"), "{rendered}");
        }
        assert!(format!("{credentials:?}").contains("a@b.com"));
    }

    #[test]
    fn provider_ids_match_session_provider() {
        assert_eq!(SignInProvider::Google.id(), "google");
        assert_eq!(SignInProvider::Github.id(), "github");
    }

    #[test]
    fn empty_session_object_is_not_a_session() -> Result<()> {
        let anonymous: Session = serde_json::from_str("{}")?;
        assert!(anonymous.is_empty());

        let signed_in: Session = serde_json::from_str(
            r#"{"user":{"name":"Ada","email":"ada@example.com"},"expires":"2026-11-01T00:00:00Z"}"#,
        )?;
        assert!(!signed_in.is_empty());
        assert_eq!(signed_in.display_name(), Some("Ada"));
        Ok(())
    }
}
