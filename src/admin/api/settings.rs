// admin/api/settings.rs - Process-wide API settings for the SSR server
//
// main.rs loads the config once at startup; server functions read it back
// to build per-request session configs.

use std::sync::Mutex;
use std::sync::OnceLock;

use crate::admin::config::AdminConfig;

static CONFIG: OnceLock<AdminConfig> = OnceLock::new();
static TEST_CONFIG_OVERRIDE: Mutex<Option<AdminConfig>> = Mutex::new(None);

/// Initialize the global API config
pub fn init_config(config: AdminConfig) {
    tracing::info!(api = %config.api_base, "Initializing storefront API config");
    if CONFIG.set(config).is_err() {
        tracing::warn!("Storefront API config already initialized");
    }
}

/// Set a config override for testing
pub fn set_test_config(config: AdminConfig) {
    if let Ok(mut guard) = TEST_CONFIG_OVERRIDE.lock() {
        *guard = Some(config);
    }
}

/// Current API config: test override, then the startup config
pub fn get_config() -> Option<AdminConfig> {
    if let Ok(guard) = TEST_CONFIG_OVERRIDE.lock() {
        if let Some(config) = guard.as_ref() {
            return Some(config.clone());
        }
    }

    let config = CONFIG.get().cloned();
    if config.is_none() {
        tracing::warn!("Storefront API config requested before init_config");
    }
    config
}

/// Config handed to one browser session.
///
/// The bearer token is the operator's own cookie token. The token this
/// process was started with is never passed on: without a cookie the
/// session gets no token at all.
pub fn session_config_for(cookie_token: Option<&str>) -> Option<AdminConfig> {
    let mut config = get_config()?;
    config.auth_token = cookie_token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);
    Some(config)
}
