//! Portal configuration: which authenticator to use and where the remote one
//! lives. Values come from build-time environment variables and may be
//! overridden at runtime (the browser build reads `window.HWR_CONFIG`), so a
//! static deployment can switch endpoints without rebuilding. Configuration
//! values are public; do not store secrets here.

use crate::authenticator::DEFAULT_MOCK_DELAY;
use crate::errors::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LOGIN_PATH: &str = "/api/auth/login";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Mock,
    Remote,
}

impl FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "remote" | "http" => Ok(Self::Remote),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    pub auth_mode: AuthMode,
    pub api_base_url: String,
    pub login_path: String,
    pub mock_delay: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            auth_mode: AuthMode::Mock,
            api_base_url: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            mock_delay: DEFAULT_MOCK_DELAY,
        }
    }
}

impl PortalConfig {
    /// Loads config from build-time environment variables.
    ///
    /// # Errors
    /// Returns an error if a variable holds an unusable value.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_runtime_overrides(RuntimeConfig {
            auth_mode: option_env!("HWR_AUTH_MODE").and_then(normalize_runtime_value),
            api_base_url: option_env!("HWR_API_BASE_URL").and_then(normalize_runtime_value),
            login_path: option_env!("HWR_LOGIN_PATH").and_then(normalize_runtime_value),
            mock_delay_ms: option_env!("HWR_MOCK_DELAY_MS").and_then(normalize_runtime_value),
        })?;
        Ok(config)
    }

    /// Applies every present override; absent values keep the current setting.
    /// Nothing changes unless all overrides parse.
    ///
    /// # Errors
    /// Returns an error for an unknown mode or a non-numeric delay.
    pub fn apply_runtime_overrides(&mut self, runtime: RuntimeConfig) -> Result<(), ConfigError> {
        let auth_mode = runtime
            .auth_mode
            .map(|value| value.parse::<AuthMode>())
            .transpose()?;
        let mock_delay = runtime
            .mock_delay_ms
            .map(|value| {
                value
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|_| ConfigError::InvalidDelay(value))
            })
            .transpose()?;

        if let Some(auth_mode) = auth_mode {
            self.auth_mode = auth_mode;
        }
        if let Some(value) = runtime.api_base_url {
            self.api_base_url = value;
        }
        if let Some(value) = runtime.login_path {
            self.login_path = value;
        }
        if let Some(mock_delay) = mock_delay {
            self.mock_delay = mock_delay;
        }
        Ok(())
    }
}

/// Optional overrides, already normalized with [`normalize_runtime_value`].
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub auth_mode: Option<String>,
    pub api_base_url: Option<String>,
    pub login_path: Option<String>,
    pub mock_delay_ms: Option<String>,
}

/// Trims a raw value and treats blank input as absent.
#[must_use]
pub fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://registry.health.go.ug "),
            Some("https://registry.health.go.ug".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = PortalConfig::default();
        let runtime = RuntimeConfig {
            auth_mode: normalize_runtime_value(""),
            api_base_url: normalize_runtime_value("  "),
            login_path: normalize_runtime_value(""),
            mock_delay_ms: normalize_runtime_value(" "),
        };

        config.apply_runtime_overrides(runtime).unwrap();

        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = PortalConfig::default();
        let runtime = RuntimeConfig {
            auth_mode: normalize_runtime_value("Remote"),
            api_base_url: normalize_runtime_value("https://api.override"),
            login_path: normalize_runtime_value("/v1/login"),
            mock_delay_ms: normalize_runtime_value("250"),
        };

        config.apply_runtime_overrides(runtime).unwrap();

        assert_eq!(config.auth_mode, AuthMode::Remote);
        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.login_path, "/v1/login");
        assert_eq!(config.mock_delay, Duration::from_millis(250));
    }

    #[test]
    fn apply_runtime_overrides_rejects_bad_values() {
        let mut config = PortalConfig::default();
        let err = config
            .apply_runtime_overrides(RuntimeConfig {
                auth_mode: Some("ldap".to_string()),
                ..RuntimeConfig::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMode(mode) if mode == "ldap"));

        let err = config
            .apply_runtime_overrides(RuntimeConfig {
                mock_delay_ms: Some("soon".to_string()),
                ..RuntimeConfig::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelay(_)));
    }

    #[test]
    fn failed_override_leaves_config_unchanged() {
        let mut config = PortalConfig::default();
        let result = config.apply_runtime_overrides(RuntimeConfig {
            auth_mode: Some("remote".to_string()),
            api_base_url: Some("https://api.override".to_string()),
            login_path: Some("/v1/login".to_string()),
            mock_delay_ms: Some("soon".to_string()),
        });

        assert!(matches!(result, Err(ConfigError::InvalidDelay(value)) if value == "soon"));
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn default_config_uses_mock() {
        let config = PortalConfig::default();
        assert_eq!(config.auth_mode, AuthMode::Mock);
        assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
        assert_eq!(config.mock_delay, DEFAULT_MOCK_DELAY);
    }
}
