//! Shared wiring for command execution: configuration, providers, and
//! storage assembled once per invocation.

use crate::cli::Cli;
use anyhow::{anyhow, Result};
use ridefare_core::config::LayeredConfig;
use ridefare_core::distance::DistanceEngine;
use ridefare_core::models::LocationData;
use ridefare_core::presets::PresetLocations;
use ridefare_core::resolver::LocationResolver;
use ridefare_providers::{NominatimGeocoder, OsrmRoutePlanner};
use ridefare_store::JsonFileStore;
use std::sync::Arc;
use std::time::Duration;

pub struct AppContext {
    pub config: LayeredConfig,
    pub resolver: Arc<LocationResolver>,
    pub engine: Arc<DistanceEngine>,
    pub presets: Arc<PresetLocations>,
    pub store: Arc<JsonFileStore>,
}

impl AppContext {
    pub fn build(cli: &Cli) -> Result<Self> {
        let mut config = LayeredConfig::with_defaults();
        if let Some(path) = &cli.config {
            config = config.load_from_file(path)?;
        }
        let config = config.load_from_env();

        let geocoder = Arc::new(NominatimGeocoder::new(config.geocoder_url.value.clone()));
        let planner = Arc::new(OsrmRoutePlanner::new(config.router_url.value.clone()));

        let resolver =
            Arc::new(LocationResolver::new(geocoder, config.region_bias.value.clone()));
        let engine = Arc::new(DistanceEngine::new(
            planner,
            config.fallback_km.value,
            Duration::from_secs(config.timeout_secs.value),
        ));

        let presets = Arc::new(PresetLocations::standard());
        let store = Arc::new(JsonFileStore::open(&cli.data_file)?);

        Ok(Self { config, resolver, engine, presets, store })
    }

    /// Resolve one endpoint argument: preset keys short-circuit the
    /// geocoder; anything else takes the top-ranked candidate.
    pub async fn resolve_endpoint(&self, text: &str) -> Result<LocationData> {
        if let Some(preset) = self.presets.lookup(text) {
            return Ok(preset.clone());
        }

        let candidates = self.resolver.resolve(text).await;
        candidates
            .into_iter()
            .next()
            .map(|c| c.location)
            .ok_or_else(|| anyhow!("no location found for '{}'", text))
    }
}
