use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::services::demand::MAX_FORECAST_PERIODS;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub planning: PlanningSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:19006".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Constants used by the planning endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlanningSettings {
    #[serde(default = "default_avg_speed_kmh")]
    pub avg_speed_kmh: f64,
    #[serde(default = "default_fuel_litres_per_km")]
    pub fuel_litres_per_km: f64,
    #[serde(default = "default_co2_kg_per_litre")]
    pub co2_kg_per_litre: f64,
    #[serde(default = "default_forecast_periods")]
    pub default_forecast_periods: u32,
    #[serde(default = "default_forecast_baseline")]
    pub forecast_baseline: f64,
    #[serde(default = "default_forecast_daily_trend")]
    pub forecast_daily_trend: f64,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            avg_speed_kmh: default_avg_speed_kmh(),
            fuel_litres_per_km: default_fuel_litres_per_km(),
            co2_kg_per_litre: default_co2_kg_per_litre(),
            default_forecast_periods: default_forecast_periods(),
            forecast_baseline: default_forecast_baseline(),
            forecast_daily_trend: default_forecast_daily_trend(),
        }
    }
}

impl PlanningSettings {
    /// Reject values that would make every planning request fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [("planning.avg_speed_kmh", self.avg_speed_kmh)];
        let non_negative = [
            ("planning.fuel_litres_per_km", self.fuel_litres_per_km),
            ("planning.co2_kg_per_litre", self.co2_kg_per_litre),
            ("planning.forecast_baseline", self.forecast_baseline),
        ];

        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Message(format!(
                    "{} must be a positive number, got {}",
                    key, value
                )));
            }
        }
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }
        if !self.forecast_daily_trend.is_finite() {
            return Err(ConfigError::Message(format!(
                "planning.forecast_daily_trend must be finite, got {}",
                self.forecast_daily_trend
            )));
        }
        if !(1..=MAX_FORECAST_PERIODS).contains(&self.default_forecast_periods) {
            return Err(ConfigError::Message(format!(
                "planning.default_forecast_periods must be between 1 and {}, got {}",
                MAX_FORECAST_PERIODS, self.default_forecast_periods
            )));
        }
        Ok(())
    }
}

fn default_avg_speed_kmh() -> f64 { crate::core::DEFAULT_AVG_SPEED_KMH }
fn default_fuel_litres_per_km() -> f64 { 0.08 }
fn default_co2_kg_per_litre() -> f64 { 2.31 }
fn default_forecast_periods() -> u32 { 30 }
fn default_forecast_baseline() -> f64 { 200.0 }
fn default_forecast_daily_trend() -> f64 { 0.5 }

impl Settings {
    /// Load configuration from defaults, files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SWARMFILL__)
    /// 5. Legacy variables `PORT` and `FRONTEND_URLS`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SWARMFILL__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        let settings = substitute_env_vars(settings)?;

        let settings: Self = settings.try_deserialize()?;
        settings.planning.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.planning.validate()?;
        Ok(settings)
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000_i64)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn env_source() -> Environment {
    Environment::with_prefix("SWARMFILL")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

/// Apply the plain `PORT` and `FRONTEND_URLS` variables on top of the
/// layered configuration
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = env::var("PORT") {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    if let Ok(urls) = env::var("FRONTEND_URLS") {
        builder = builder.set_override("cors.allowed_origins", parse_origins(&urls))?;
    }

    builder.build()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
