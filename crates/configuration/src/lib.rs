use crate::error::ConfigError;
use rust_decimal::Decimal;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DisplayConfig, InsightConfig, Settings, TrendConfig};

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "stocklens.toml";

/// Prefix for environment overrides, e.g. `STOCKLENS_TRENDS__MOVE_WINDOW=10`.
pub const ENV_PREFIX: &str = "STOCKLENS";

/// Loads the application configuration.
///
/// Sources are layered in order: built-in defaults, then the TOML file, then
/// `STOCKLENS_*` environment variables. An explicit `path` must exist; the
/// default `stocklens.toml` is optional.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    // Missing keys fall back to the `Default` impls through `#[serde(default)]`.
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(?settings, "Configuration loaded");
    Ok(settings)
}

impl Settings {
    /// Rejects parameter combinations the analysis cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trends.move_window == 0 {
            return Err(ConfigError::ValidationError(
                "trends.move_window must be at least 1".to_string(),
            ));
        }
        if self.trends.move_threshold_pct <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "trends.move_threshold_pct must be positive".to_string(),
            ));
        }
        if self.insights.min_records < 2 {
            return Err(ConfigError::ValidationError(
                "insights.min_records must be at least 2".to_string(),
            ));
        }
        if self.insights.volume_multiple <= Decimal::ZERO
            || self.insights.daily_move_threshold_pct <= Decimal::ZERO
        {
            return Err(ConfigError::ValidationError(
                "insight thresholds must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
