//! Geocoding and routing ports

use crate::error::Result;
use async_trait::async_trait;

/// One ranked candidate from a geocoding lookup.
///
/// Coordinates stay as the provider's decimal strings. `suburb`/`city`
/// come from the provider's address breakdown and feed the compact
/// display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceCandidate {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    pub suburb: Option<String>,
    pub city: Option<String>,
}

/// Port for free-text place lookup against an external geocoding provider.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Search for places matching `query`, ranked by the provider's
    /// relevance, returning at most `limit` candidates.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PlaceCandidate>>;
}

/// Port for road-distance lookup against an external routing provider.
#[async_trait]
pub trait RoutePlanner: Send + Sync {
    /// Total driving distance in meters between two `(lon, lat)` pairs.
    ///
    /// Returns an error when no route exists or the provider is
    /// unreachable; callers decide how to degrade.
    async fn driving_distance_meters(
        &self,
        origin: (f64, f64),
        destination: (f64, f64),
    ) -> Result<f64>;
}
