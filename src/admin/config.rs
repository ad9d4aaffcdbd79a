// admin/config.rs - Storefront API location and credentials
//
// The config is serializable so the server can hand it to the browser
// through the session_config server function.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_IMAGE_URL: &str = "http://localhost:8000/uploads";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the storefront REST API lives and how to authenticate against it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub api_base: String,
    pub products_path: String,
    pub create_path: String,
    pub update_path: String,
    pub delete_path: String,
    pub categories_path: String,
    /// Base URL for product thumbnails and gallery images
    pub image_base: String,
    /// Bearer token attached to every request when present
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl AdminConfig {
    /// Default endpoint layout rooted at `api_base`
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            products_path: "/products".to_string(),
            create_path: "/products/add".to_string(),
            update_path: "/products/update".to_string(),
            delete_path: "/products/delete".to_string(),
            categories_path: "/categories".to_string(),
            image_base: DEFAULT_IMAGE_URL.to_string(),
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = image_base.into();
        self
    }

    /// Load from `STOREFRONT_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: var_or("STOREFRONT_API_URL", &defaults.api_base),
            products_path: var_or("STOREFRONT_PRODUCTS_PATH", &defaults.products_path),
            create_path: var_or("STOREFRONT_CREATE_PATH", &defaults.create_path),
            update_path: var_or("STOREFRONT_UPDATE_PATH", &defaults.update_path),
            delete_path: var_or("STOREFRONT_DELETE_PATH", &defaults.delete_path),
            categories_path: var_or("STOREFRONT_CATEGORIES_PATH", &defaults.categories_path),
            image_base: var_or("STOREFRONT_IMAGE_URL", &defaults.image_base),
            auth_token: env::var("STOREFRONT_API_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            timeout_secs: parse_or("STOREFRONT_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn keyed(&self, path: &str, id: &str) -> String {
        format!("{}/{}", self.endpoint(path).trim_end_matches('/'), id)
    }

    pub fn products_url(&self) -> String {
        self.endpoint(&self.products_path)
    }

    pub fn create_url(&self) -> String {
        self.endpoint(&self.create_path)
    }

    pub fn update_url(&self, id: &str) -> String {
        self.keyed(&self.update_path, id)
    }

    pub fn delete_url(&self, id: &str) -> String {
        self.keyed(&self.delete_path, id)
    }

    pub fn categories_url(&self) -> String {
        self.endpoint(&self.categories_path)
    }

    /// Resolve a stored image file name; absolute URLs pass through
    pub fn image_url(&self, file_name: &str) -> String {
        if file_name.starts_with("http://") || file_name.starts_with("https://") {
            return file_name.to_string();
        }
        format!(
            "{}/{}",
            self.image_base.trim_end_matches('/'),
            file_name.trim_start_matches('/')
        )
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => default,
    }
}
