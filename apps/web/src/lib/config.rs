//! Build-time portal configuration with an optional runtime override read from
//! `window.HWR_CONFIG`, so static deployments can switch the authenticator or
//! API endpoint without rebuilding. Configuration values are public.

use hwr_portal::config::{normalize_runtime_value, PortalConfig, RuntimeConfig};
use hwr_portal::errors::ConfigError;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

/// Loads the build-time config, applies runtime overrides and, for a remote
/// authenticator without an explicit base URL, targets the page's own origin.
pub fn load() -> Result<PortalConfig, ConfigError> {
    let mut config = PortalConfig::load()?;

    if let Some(runtime) = runtime_config() {
        config.apply_runtime_overrides(runtime)?;
    }

    if config.api_base_url.is_empty() {
        if let Some(origin) = window_origin() {
            config.api_base_url = origin;
        }
    }

    Ok(config)
}

fn runtime_config() -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("HWR_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        auth_mode: read_runtime_value(&object, "auth_mode"),
        api_base_url: read_runtime_value(&object, "api_base_url"),
        login_path: read_runtime_value(&object, "login_path"),
        mock_delay_ms: read_runtime_value(&object, "mock_delay_ms"),
    })
}

fn read_runtime_value(object: &Object, key: &str) -> Option<String> {
    let value = Reflect::get(object, &JsValue::from_str(key)).ok()?;
    // Numbers are accepted for the delay as well as strings.
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn window_origin() -> Option<String> {
    web_sys::window()?
        .location()
        .origin()
        .ok()
        .and_then(|origin| normalize_runtime_value(&origin))
}
