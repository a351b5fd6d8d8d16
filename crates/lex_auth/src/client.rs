//! Identity provider HTTP client.
//!
//! Thin boundary over the external identity provider: credentials go out,
//! success/failure plus an opaque token come back. The chat core never
//! inspects the token.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::validate::SignupForm;

/// Opaque credential token issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Client for the identity provider endpoints.
pub struct IdentityClient {
    base_url: String,
    client: reqwest::Client,
}

impl IdentityClient {
    /// Create a client for the given provider base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Submit credentials; on success the provider issues a token
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<AuthToken> {
        let url = format!("{}/login", self.base_url.trim_end_matches('/'));
        debug!("Submitting credentials to {}", url);

        let request = CredentialRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Network(format!("Failed to parse response: {}", e)))?;

        Ok(AuthToken::new(body.token))
    }

    /// Create a new account
    pub async fn signup(&self, form: &SignupForm) -> AuthResult<()> {
        let url = format!("{}/signup", self.base_url.trim_end_matches('/'));
        debug!("Creating account at {}", url);

        let request = SignupRequest {
            username: form.username.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 409 {
            return Err(AuthError::AccountExists(request.username));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

// Wire types for the identity provider
#[derive(Debug, Serialize)]
struct CredentialRequest {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct SignupRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_opaque_passthrough() {
        let token = AuthToken::new("eyJhbGciOi...");
        assert_eq!(token.as_str(), "eyJhbGciOi...");
        assert_eq!(token.into_string(), "eyJhbGciOi...");
    }

    #[test]
    fn test_client_configuration() {
        let client = IdentityClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080/");
    }

    #[test]
    fn test_login_response_wire_format() {
        let body: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(body.token, "abc123");
    }
}
