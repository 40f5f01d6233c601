use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::ports::auth::CredentialVerifier;
use crate::domain::errors::{DomainError, DomainResult};

/// Credential verifier backed by the OAuth2 password grant.
///
/// Exchanges the caller's username and password for a token at the realm's
/// token endpoint and discards the result; the exchange succeeding is the
/// only signal used. Supports confidential clients via an optional client
/// secret.
pub struct PasswordGrantVerifier {
    server_url: String,
    realm: String,
    client_id: String,
    client_secret: Option<String>,
    client: reqwest::Client,
}

impl PasswordGrantVerifier {
    pub fn new(
        server_url: impl Into<String>,
        realm: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: Option<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            realm: realm.into(),
            client_id: client_id.into(),
            client_secret,
            client,
        }
    }

    fn token_url(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.server_url.trim_end_matches('/'),
            self.realm
        )
    }
}

#[async_trait]
impl CredentialVerifier for PasswordGrantVerifier {
    #[instrument(skip(self, password))]
    async fn verify_password(&self, username: &str, password: &str) -> DomainResult<()> {
        let mut form = vec![
            ("grant_type", "password"),
            ("client_id", self.client_id.as_str()),
            ("username", username),
            ("password", password),
        ];
        if let Some(secret) = &self.client_secret {
            form.push(("client_secret", secret.as_str()));
        }

        let response = self
            .client
            .post(self.token_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| DomainError::AuthenticationFailed {
                reason: format!("Token request failed: {e}"),
            })?;

        if response.status().is_success() {
            debug!("Password grant succeeded for '{}'; token discarded", username);
            Ok(())
        } else {
            Err(DomainError::AuthenticationFailed {
                reason: format!("Password grant rejected with status {}", response.status()),
            })
        }
    }
}
