//! Authenticator strategies. The login flow only depends on the
//! [`Authenticator`] trait; [`AuthBackend`] picks the mock or the remote HTTP
//! implementation from configuration so either can be swapped in without
//! touching the screens.

mod mock;
mod remote;

pub use mock::{
    MockAuthenticator, DEFAULT_MOCK_DELAY, MOCK_PASSWORD, MOCK_REJECTION, MOCK_TOKEN,
    MOCK_USERNAME,
};
pub use remote::RemoteAuthenticator;

use crate::config::{AuthMode, PortalConfig};
use crate::errors::{ConfigError, TransportError};
use crate::login::Credentials;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Token and user record issued on a successful login.
#[derive(Clone, PartialEq, Deserialize)]
pub struct AuthGrant {
    pub token: String,
    #[serde(default)]
    pub user: Value,
}

impl fmt::Debug for AuthGrant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthGrant")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthResponse {
    Granted(AuthGrant),
    /// Credentials refused; `message` is shown verbatim when present.
    Rejected { message: Option<String> },
}

#[allow(async_fn_in_trait)]
pub trait Authenticator {
    /// Checks `credentials`. A refusal is `Ok(AuthResponse::Rejected)`; `Err`
    /// is reserved for failures reaching or understanding the authenticator.
    ///
    /// # Errors
    /// Returns [`TransportError`] when the call itself fails.
    async fn authenticate(&self, credentials: &Credentials)
        -> Result<AuthResponse, TransportError>;
}

/// Authenticator selected at startup.
#[derive(Debug)]
pub enum AuthBackend {
    Mock(MockAuthenticator),
    Remote(RemoteAuthenticator),
}

impl AuthBackend {
    /// # Errors
    /// Returns an error if the remote endpoint URL or HTTP client is invalid.
    pub fn from_config(config: &PortalConfig) -> Result<Self, ConfigError> {
        match config.auth_mode {
            AuthMode::Mock => Ok(Self::Mock(MockAuthenticator::with_delay(config.mock_delay))),
            AuthMode::Remote => Ok(Self::Remote(RemoteAuthenticator::new(
                &config.api_base_url,
                &config.login_path,
            )?)),
        }
    }
}

impl Authenticator for AuthBackend {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, TransportError> {
        match self {
            Self::Mock(mock) => mock.authenticate(credentials).await,
            Self::Remote(remote) => remote.authenticate(credentials).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn backend_from_default_config_is_mock() {
        let config = PortalConfig::default();
        assert!(matches!(
            AuthBackend::from_config(&config),
            Ok(AuthBackend::Mock(_))
        ));
    }

    #[test]
    fn remote_backend_requires_base_url() {
        let config = PortalConfig {
            auth_mode: AuthMode::Remote,
            api_base_url: String::new(),
            ..PortalConfig::default()
        };
        assert!(matches!(
            AuthBackend::from_config(&config),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn remote_backend_joins_login_path() {
        let config = PortalConfig {
            auth_mode: AuthMode::Remote,
            api_base_url: "https://registry.health.go.ug/".to_string(),
            login_path: "/api/auth/login".to_string(),
            mock_delay: Duration::ZERO,
        };
        match AuthBackend::from_config(&config) {
            Ok(AuthBackend::Remote(remote)) => assert_eq!(
                remote.endpoint().as_str(),
                "https://registry.health.go.ug/api/auth/login"
            ),
            other => panic!("unexpected backend: {other:?}"),
        }
    }

    #[test]
    fn grant_debug_redacts_token() {
        let grant = AuthGrant {
            token: "abc123".to_string(),
            user: Value::Null,
        };
        assert!(!format!("{grant:?}").contains("abc123"));
    }
}
