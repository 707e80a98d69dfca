use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// "bundled", a path to a JSON file or an http(s) URL
    pub price_source: String,

    /// Base URL of the per-currency SVG icons
    pub icon_base_url: String,

    /// Probe icons after the prices are loaded
    pub preload_icons: bool,

    /// Currencies selected when the form opens
    pub default_from_currency: String,
    pub default_to_currency: String,

    /// Simulated latency of the price load
    pub price_load_delay_ms: u64,

    /// Quiet period before a typed amount is converted
    pub debounce_ms: u64,

    /// Simulated latency of a debounced conversion
    pub conversion_latency_ms: u64,

    /// Simulated latency of a swap
    pub swap_delay_ms: u64,

    /// How long a notification stays visible
    pub notification_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            price_source: "bundled".to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            preload_icons: true,
            default_from_currency: "ETH".to_string(),
            default_to_currency: "USDC".to_string(),
            price_load_delay_ms: 1500,
            debounce_ms: 300,
            conversion_latency_ms: 500,
            swap_delay_ms: 1500,
            notification_duration_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Layers the defaults, an optional `token-swap.toml` and `SWAP_*`
    /// environment variables, in that order.
    pub fn from_env() -> Result<Self> {
        Self::load(config::File::with_name("token-swap").required(false))
    }

    /// Same as [`AppConfig::from_env`] with an explicit file source.
    pub fn load(file: config::File<config::FileSourceFile, config::FileFormat>) -> Result<Self> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("price_source", defaults.price_source)?
            .set_default("icon_base_url", defaults.icon_base_url)?
            .set_default("preload_icons", defaults.preload_icons)?
            .set_default("default_from_currency", defaults.default_from_currency)?
            .set_default("default_to_currency", defaults.default_to_currency)?
            .set_default("price_load_delay_ms", defaults.price_load_delay_ms)?
            .set_default("debounce_ms", defaults.debounce_ms)?
            .set_default("conversion_latency_ms", defaults.conversion_latency_ms)?
            .set_default("swap_delay_ms", defaults.swap_delay_ms)?
            .set_default("notification_duration_ms", defaults.notification_duration_ms)?
            .add_source(file)
            .add_source(config::Environment::with_prefix("SWAP").try_parsing(true))
            .build()
            .context("Failed to build configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn price_load_delay(&self) -> Duration {
        Duration::from_millis(self.price_load_delay_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn conversion_latency(&self) -> Duration {
        Duration::from_millis(self.conversion_latency_ms)
    }

    pub fn swap_delay(&self) -> Duration {
        Duration::from_millis(self.swap_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// Configuration without any simulated latency, for tests and scripting
    pub fn instant() -> Self {
        Self {
            preload_icons: false,
            price_load_delay_ms: 0,
            conversion_latency_ms: 0,
            swap_delay_ms: 0,
            ..Self::default()
        }
    }
}
