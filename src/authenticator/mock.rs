//! In-process authenticator accepting one fixed credential pair after a delay,
//! used for demos and offline development.

use super::{AuthGrant, AuthResponse, Authenticator};
use crate::errors::TransportError;
use crate::login::Credentials;
use secrecy::ExposeSecret;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

pub const MOCK_USERNAME: &str = "admin";
pub const MOCK_PASSWORD: &str = "password";
pub const MOCK_TOKEN: &str = "mock-token";
pub const MOCK_REJECTION: &str = "Invalid credentials. Use admin/password";
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug)]
pub struct MockAuthenticator {
    delay: Duration,
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::with_delay(DEFAULT_MOCK_DELAY)
    }
}

impl MockAuthenticator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Authenticator for MockAuthenticator {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, TransportError> {
        sleep(self.delay).await;

        if credentials.username == MOCK_USERNAME
            && credentials.password.expose_secret() == MOCK_PASSWORD
        {
            debug!("Mock login granted");
            Ok(AuthResponse::Granted(AuthGrant {
                token: MOCK_TOKEN.to_string(),
                user: json!({ "id": 1, "name": "Admin" }),
            }))
        } else {
            debug!("Mock login rejected");
            Ok(AuthResponse::Rejected {
                message: Some(MOCK_REJECTION.to_string()),
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    if !delay.is_zero() {
        gloo_timers::future::sleep(delay).await;
    }
}
