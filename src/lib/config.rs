//! Build-time configuration for the auth API and session endpoints with an
//! optional runtime override. The runtime config is read from
//! `window.CLOUD_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

use std::str::FromStr;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8090/api/v1/auth";
const DEFAULT_SESSION_BASE_URL: &str = "/api/auth";
const DEFAULT_HOME_PATH: &str = "/";
const DEFAULT_LOG_LEVEL: &str = "info";

/// How the app leaves an auth dialog after a successful login or activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Full page load so the session gate re-reads fresh cookies.
    #[default]
    FullReload,
    /// Router navigation without reloading the bundle.
    ClientSide,
}

impl FromStr for NavigationPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reload" | "full" | "full_reload" => Ok(Self::FullReload),
            "client" | "client_side" | "spa" => Ok(Self::ClientSide),
            other => Err(format!("unknown navigation policy: {other}")),
        }
    }
}

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_base_url: String,
    pub home_path: String,
    pub navigation: NavigationPolicy,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_base_url: DEFAULT_SESSION_BASE_URL.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
            navigation: NavigationPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        let build_time = RuntimeConfig {
            api_base_url: option_env!("CLOUD_API_BASE_URL").and_then(normalize_runtime_value),
            session_base_url: option_env!("CLOUD_SESSION_BASE_URL")
                .and_then(normalize_runtime_value),
            home_path: option_env!("CLOUD_HOME_PATH").and_then(normalize_runtime_value),
            navigation: option_env!("CLOUD_NAVIGATION").and_then(normalize_runtime_value),
            log_level: option_env!("CLOUD_LOG_LEVEL").and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build_time);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    session_base_url: Option<String>,
    home_path: Option<String>,
    navigation: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.session_base_url {
        config.session_base_url = value;
    }
    if let Some(value) = runtime.home_path {
        config.home_path = value;
    }
    if let Some(value) = runtime.navigation {
        match value.parse() {
            Ok(policy) => config.navigation = policy,
            Err(err) => log::warn!("ignoring navigation override: {err}"),
        }
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("CLOUD_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        session_base_url: read_runtime_value(&object, "session_base_url"),
        home_path: read_runtime_value(&object, "home_path"),
        navigation: read_runtime_value(&object, "navigation"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
