//! HTTP authenticator posting credentials to the registry API. The request
//! body carries the password, so neither the body nor the returned token is
//! ever logged.

use super::{AuthGrant, AuthResponse, Authenticator};
use crate::errors::{ConfigError, TransportError};
use crate::login::Credentials;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RemoteAuthenticator {
    client: reqwest::Client,
    endpoint: Url,
}

impl RemoteAuthenticator {
    /// # Errors
    /// Returns an error if the joined endpoint is not an absolute URL or the
    /// HTTP client cannot be built.
    pub fn new(api_base_url: &str, login_path: &str) -> Result<Self, ConfigError> {
        let raw = build_url_with_base(api_base_url, login_path);
        let endpoint = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        Ok(Self {
            client: build_client()?,
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Authenticator for RemoteAuthenticator {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, TransportError> {
        let body = LoginRequest {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        };

        let request = self.client.post(self.endpoint.clone()).json(&body);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let mut grant: AuthGrant = response.json().await?;
            if grant.token.trim().is_empty() {
                return Err(TransportError::Decode(
                    "login response carried an empty token".to_string(),
                ));
            }
            if grant.user.is_null() {
                grant.user = Value::Object(serde_json::Map::new());
            }
            debug!(status = status.as_u16(), "Login granted");
            Ok(AuthResponse::Granted(grant))
        } else {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message);
            debug!(status = status.as_u16(), "Login rejected");
            Ok(AuthResponse::Rejected { message })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .user_agent(crate::APP_USER_AGENT)
        .cookie_store(true)
        .build()
        .map_err(ConfigError::Client)
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .build()
        .map_err(ConfigError::Client)
}

/// Joins a base URL and a path without doubling or dropping the separator.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_with_base_normalizes_slashes() {
        assert_eq!(
            build_url_with_base("https://api.tld/", "/api/auth/login"),
            "https://api.tld/api/auth/login"
        );
        assert_eq!(
            build_url_with_base(" https://api.tld/v1 ", "auth/login"),
            "https://api.tld/v1/auth/login"
        );
        assert_eq!(build_url_with_base("", "/api/auth/login"), "/api/auth/login");
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        assert!(matches!(
            RemoteAuthenticator::new("", "/api/auth/login"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
