//! Storefront API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Pricing overrides are layered on top of
//! [`PricingConfig::default`] and the result is validated before the server
//! starts.

use std::env;
use std::str::FromStr;

use bazaar_core::money::Money;
use bazaar_core::pricing::PricingConfig;
use bazaar_core::types::TaxRate;

/// Storefront API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind, e.g. `0.0.0.0`
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// Fee schedule used for quotes
    pub pricing: PricingConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            pricing: PricingConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// ## Variables
    /// - `BAZAAR_BIND_ADDR` (default `0.0.0.0`)
    /// - `BAZAAR_PORT` (default `8080`)
    /// - `BAZAAR_GST_RATE_BPS`
    /// - `BAZAAR_PLATFORM_FEE_PAISE`
    /// - `BAZAAR_PERSONALIZATION_FEE_PAISE`
    /// - `BAZAAR_INSURANCE_THRESHOLD_PAISE`
    /// - `BAZAAR_INSURANCE_FEE_PAISE`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();
        let mut pricing = defaults.pricing;

        if let Some(bps) = parse_var::<u32, _>(&lookup, "BAZAAR_GST_RATE_BPS")? {
            pricing.gst_rate = TaxRate::from_bps(bps);
        }
        if let Some(paise) = parse_var::<i64, _>(&lookup, "BAZAAR_PLATFORM_FEE_PAISE")? {
            pricing.platform_fee = Money::from_paise(paise);
        }
        if let Some(paise) = parse_var::<i64, _>(&lookup, "BAZAAR_PERSONALIZATION_FEE_PAISE")? {
            pricing.personalization_fee = Money::from_paise(paise);
        }
        if let Some(paise) = parse_var::<i64, _>(&lookup, "BAZAAR_INSURANCE_THRESHOLD_PAISE")? {
            pricing.insurance_threshold = Money::from_paise(paise);
        }
        if let Some(paise) = parse_var::<i64, _>(&lookup, "BAZAAR_INSURANCE_FEE_PAISE")? {
            pricing.insurance_fee = Money::from_paise(paise);
        }

        pricing
            .validate()
            .map_err(|e| ConfigError::InvalidPricing(e.to_string()))?;

        Ok(ApiConfig {
            bind_addr: lookup("BAZAAR_BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_var(&lookup, "BAZAAR_PORT")?.unwrap_or(defaults.port),
            pricing,
        })
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        None => Ok(None),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid pricing configuration: {0}")]
    InvalidPricing(String),
}
