//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Largest number of decimal places a `Decimal` can carry.
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Calculator configuration.
    #[serde(default)]
    pub calculator: CalculatorConfig,
    /// Nisab derivation weights.
    #[serde(default)]
    pub nisab: NisabConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Calculator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Local currency that estate values and Nisab amounts are expressed in.
    #[serde(default)]
    pub currency: Currency,
    /// Decimal places that inheritance shares are truncated to.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            decimal_places: default_decimal_places(),
        }
    }
}

fn default_decimal_places() -> u32 {
    2
}

/// Weights used to derive Nisab thresholds from metal prices.
#[derive(Debug, Clone, Deserialize)]
pub struct NisabConfig {
    /// Grams of gold in the gold Nisab (20 dinars).
    #[serde(default = "default_gold_grams")]
    pub gold_grams: Decimal,
    /// Grams of silver in the silver Nisab (200 dirhams).
    #[serde(default = "default_silver_grams")]
    pub silver_grams: Decimal,
    /// Grams per troy ounce, the unit metal prices are quoted in.
    #[serde(default = "default_grams_per_troy_ounce")]
    pub grams_per_troy_ounce: Decimal,
    /// Divisor applied to the gold Nisab when no silver price is available.
    #[serde(default = "default_silver_fallback_divisor")]
    pub silver_fallback_divisor: Decimal,
}

impl Default for NisabConfig {
    fn default() -> Self {
        Self {
            gold_grams: default_gold_grams(),
            silver_grams: default_silver_grams(),
            grams_per_troy_ounce: default_grams_per_troy_ounce(),
            silver_fallback_divisor: default_silver_fallback_divisor(),
        }
    }
}

fn default_gold_grams() -> Decimal {
    Decimal::from(85)
}

fn default_silver_grams() -> Decimal {
    Decimal::from(595)
}

fn default_grams_per_troy_ounce() -> Decimal {
    Decimal::new(311_035, 4) // 31.1035
}

fn default_silver_fallback_divisor() -> Decimal {
    Decimal::TEN
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, or if
    /// `calculator.decimal_places` exceeds [`MAX_DECIMAL_PLACES`].
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ISHRAKAAT").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.calculator.decimal_places > MAX_DECIMAL_PLACES {
            return Err(config::ConfigError::Message(format!(
                "calculator.decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.calculator.decimal_places
            )));
        }
        Ok(())
    }
}
