//! Request and response types for the auth API plus the cached identity.
//! Field spellings match the remote API exactly (`accessToken`,
//! `VerificationToken`, `resetToken`); payloads carry passwords and tokens and
//! must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct VerifyAccountRequest {
    #[serde(rename = "VerificationToken")]
    pub verification_token: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RequestPasswordResetRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ApplyPasswordResetRequest {
    #[serde(rename = "resetToken")]
    pub reset_token: String,
    pub password: String,
}

/// Envelope returned by login, createAccount, and verifyAccount. Fields are
/// optional because each operation fills a different subset.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
    #[serde(rename = "isAccountPendingVerification", default)]
    pub is_account_pending_verification: Option<bool>,
}

/// Cached authenticated identity. Exactly one identity is active at a time
/// per browser context; see `store::SessionStore`.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub access_token: String,
    pub pending_verification: bool,
}

/// Projection of `Identity` written to the `auth_user` storage entry. The
/// access token is stored separately under `auth_token`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredIdentity {
    pub id: String,
    pub email: String,
    #[serde(rename = "isAccountPendingVerification", default)]
    pub pending_verification: bool,
}

impl StoredIdentity {
    pub fn into_identity(self, access_token: String) -> Identity {
        Identity {
            id: self.id,
            email: self.email,
            access_token,
            pending_verification: self.pending_verification,
        }
    }
}

impl From<&Identity> for StoredIdentity {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            email: identity.email.clone(),
            pending_verification: identity.pending_verification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_use_api_field_spellings() {
        let verify = VerifyAccountRequest {
            verification_token: "abc".to_string(),
        };
        let json = serde_json::to_string(&verify).expect("serialize");
        assert!(json.contains("\"VerificationToken\":\"abc\""));

        let reset = ApplyPasswordResetRequest {
            reset_token: "tok".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&reset).expect("serialize");
        assert!(json.contains("\"resetToken\":\"tok\""));
    }

    #[test]
    fn auth_response_tolerates_partial_payloads() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"accessToken":"token-1"}"#).expect("deserialize");
        assert_eq!(response.access_token.as_deref(), Some("token-1"));
        assert_eq!(response.message, None);
        assert_eq!(response.is_account_pending_verification, None);
    }

    #[test]
    fn stored_identity_round_trips_through_storage_shape() {
        let identity = Identity {
            id: "abc123".to_string(),
            email: "kid@example.com".to_string(),
            access_token: "token-1".to_string(),
            pending_verification: false,
        };
        let stored = StoredIdentity::from(&identity);
        let json = serde_json::to_string(&stored).expect("serialize");
        assert!(json.contains("isAccountPendingVerification"));
        let parsed: StoredIdentity = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.into_identity("token-1".to_string()), identity);
    }
}
