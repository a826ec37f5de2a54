//! Storefront configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::cart::DEFAULT_CART_KEY;

/// Settings embedded at build time from `Shop.toml`.
const EMBEDDED: &str = include_str!("../Shop.toml");

/// Configuration for the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Application name, used in log lines.
    pub app_name: String,
    /// Page title.
    pub title: String,
    /// Base URL of the REST backend; `/products` is appended.
    pub api_base_url: String,
    /// localStorage key holding the cart.
    pub cart_storage_key: String,
    /// Image shown for products without one.
    pub placeholder_image: String,
    /// `tracing` filter directive, e.g. `info` or `shop_data=debug`.
    pub log_level: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            app_name: "shop".to_string(),
            title: "Shop".to_string(),
            api_base_url: "http://localhost:3001".to_string(),
            cart_storage_key: DEFAULT_CART_KEY.to_string(),
            placeholder_image: "https://placehold.co/300x200?text=No+Image".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ShopConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            app_name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_cart_storage_key(mut self, key: impl Into<String>) -> Self {
        self.cart_storage_key = key.into();
        self
    }

    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Parse TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse storefront config")
    }

    /// The config baked into the binary, or defaults if it does not parse.
    pub fn embedded() -> Self {
        Self::from_toml_str(EMBEDDED).unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{:#}", e), "using default config");
            Self::default()
        })
    }
}
