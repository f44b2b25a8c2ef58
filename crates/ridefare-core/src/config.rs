use crate::error::{Result, RidefareError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for ridefare
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Base URL of the geocoding provider
    pub geocoder_url: ConfigValue<String>,
    /// Base URL of the road-routing provider
    pub router_url: ConfigValue<String>,
    /// Region qualifier appended to every geocoding query
    pub region_bias: ConfigValue<String>,
    /// Distance substituted when the routing provider is unavailable
    pub fallback_km: ConfigValue<u32>,
    /// Upper bound on any single provider call, in seconds
    pub timeout_secs: ConfigValue<u64>,
    /// Input-silence window before a lookup is dispatched, in milliseconds
    pub debounce_ms: ConfigValue<u64>,
    /// Dispatcher WhatsApp number receiving booking hand-offs
    pub dispatch_number: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            geocoder_url: ConfigValue::new(
                "https://nominatim.openstreetmap.org".to_string(),
                ConfigSource::Default,
            ),
            router_url: ConfigValue::new(
                "https://router.project-osrm.org".to_string(),
                ConfigSource::Default,
            ),
            region_bias: ConfigValue::new("Maharashtra".to_string(), ConfigSource::Default),
            fallback_km: ConfigValue::new(35, ConfigSource::Default),
            timeout_secs: ConfigValue::new(8, ConfigSource::Default),
            debounce_ms: ConfigValue::new(500, ConfigSource::Default),
            dispatch_number: ConfigValue::new("918850351310".to_string(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| RidefareError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| RidefareError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(geocoder_url) = file_config.geocoder_url {
            self.geocoder_url.update(geocoder_url, ConfigSource::File);
        }

        if let Some(router_url) = file_config.router_url {
            self.router_url.update(router_url, ConfigSource::File);
        }

        if let Some(region_bias) = file_config.region_bias {
            self.region_bias.update(region_bias, ConfigSource::File);
        }

        if let Some(fallback_km) = file_config.fallback_km {
            self.fallback_km.update(fallback_km, ConfigSource::File);
        }

        if let Some(timeout_secs) = file_config.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::File);
        }

        if let Some(debounce_ms) = file_config.debounce_ms {
            self.debounce_ms.update(debounce_ms, ConfigSource::File);
        }

        if let Some(dispatch_number) = file_config.dispatch_number {
            self.dispatch_number.update(dispatch_number, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(url) = env::var("RIDEFARE_GEOCODER_URL") {
            self.geocoder_url.update(url, ConfigSource::Environment);
        }

        if let Ok(url) = env::var("RIDEFARE_ROUTER_URL") {
            self.router_url.update(url, ConfigSource::Environment);
        }

        if let Ok(bias) = env::var("RIDEFARE_REGION_BIAS") {
            self.region_bias.update(bias, ConfigSource::Environment);
        }

        if let Ok(km_str) = env::var("RIDEFARE_FALLBACK_KM") {
            match km_str.parse::<u32>() {
                Ok(km) => self.fallback_km.update(km, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid RIDEFARE_FALLBACK_KM value '{}': expected integer kilometers",
                    km_str
                ),
            }
        }

        if let Ok(secs_str) = env::var("RIDEFARE_TIMEOUT_SECS") {
            match secs_str.parse::<u64>() {
                Ok(secs) => self.timeout_secs.update(secs, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid RIDEFARE_TIMEOUT_SECS value '{}': expected integer seconds",
                    secs_str
                ),
            }
        }

        if let Ok(ms_str) = env::var("RIDEFARE_DEBOUNCE_MS") {
            match ms_str.parse::<u64>() {
                Ok(ms) => self.debounce_ms.update(ms, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid RIDEFARE_DEBOUNCE_MS value '{}': expected integer milliseconds",
                    ms_str
                ),
            }
        }

        if let Ok(number) = env::var("RIDEFARE_DISPATCH_NUMBER") {
            self.dispatch_number.update(number, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(geocoder_url) = overrides.geocoder_url {
            self.geocoder_url.update(geocoder_url, ConfigSource::Cli);
        }

        if let Some(router_url) = overrides.router_url {
            self.router_url.update(router_url, ConfigSource::Cli);
        }

        if let Some(region_bias) = overrides.region_bias {
            self.region_bias.update(region_bias, ConfigSource::Cli);
        }

        if let Some(fallback_km) = overrides.fallback_km {
            self.fallback_km.update(fallback_km, ConfigSource::Cli);
        }

        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::Cli);
        }

        if let Some(dispatch_number) = overrides.dispatch_number {
            self.dispatch_number.update(dispatch_number, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "geocoder_url".to_string(),
            (self.geocoder_url.value.clone(), self.geocoder_url.source),
        );

        map.insert(
            "router_url".to_string(),
            (self.router_url.value.clone(), self.router_url.source),
        );

        map.insert(
            "region_bias".to_string(),
            (self.region_bias.value.clone(), self.region_bias.source),
        );

        map.insert(
            "fallback_km".to_string(),
            (self.fallback_km.value.to_string(), self.fallback_km.source),
        );

        map.insert(
            "timeout_secs".to_string(),
            (self.timeout_secs.value.to_string(), self.timeout_secs.source),
        );

        map.insert(
            "debounce_ms".to_string(),
            (self.debounce_ms.value.to_string(), self.debounce_ms.source),
        );

        map.insert(
            "dispatch_number".to_string(),
            (self.dispatch_number.value.clone(), self.dispatch_number.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    geocoder_url: Option<String>,
    router_url: Option<String>,
    region_bias: Option<String>,
    fallback_km: Option<u32>,
    timeout_secs: Option<u64>,
    debounce_ms: Option<u64>,
    dispatch_number: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub geocoder_url: Option<String>,
    pub router_url: Option<String>,
    pub region_bias: Option<String>,
    pub fallback_km: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub dispatch_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.region_bias.value, "Maharashtra");
        assert_eq!(config.region_bias.source, ConfigSource::Default);
        assert_eq!(config.fallback_km.value, 35);
        assert_eq!(config.timeout_secs.value, 8);
        assert_eq!(config.debounce_ms.value, 500);
        assert_eq!(config.dispatch_number.value, "918850351310");
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
region_bias = "Goa"
fallback_km = 50
timeout_secs = 12
dispatch_number = "910000000000"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.region_bias.value, "Goa");
        assert_eq!(config.region_bias.source, ConfigSource::File);
        assert_eq!(config.fallback_km.value, 50);
        assert_eq!(config.timeout_secs.value, 12);
        assert_eq!(config.dispatch_number.value, "910000000000");
        // Untouched keys keep their defaults
        assert_eq!(config.debounce_ms.value, 500);
        assert_eq!(config.debounce_ms.source, ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            router_url: Some("http://localhost:5000".to_string()),
            fallback_km: Some(40),
            ..Default::default()
        };

        config.update_from_cli(overrides);

        assert_eq!(config.router_url.value, "http://localhost:5000");
        assert_eq!(config.router_url.source, ConfigSource::Cli);
        assert_eq!(config.fallback_km.value, 40);
        assert_eq!(config.fallback_km.source, ConfigSource::Cli);
        assert_eq!(config.geocoder_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("geocoder_url"));
        assert!(map.contains_key("router_url"));
        assert!(map.contains_key("fallback_km"));

        let (fallback, source) = &map["fallback_km"];
        assert_eq!(fallback, "35");
        assert_eq!(*source, ConfigSource::Default);
    }
}
