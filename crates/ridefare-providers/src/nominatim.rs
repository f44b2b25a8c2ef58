use async_trait::async_trait;
use ridefare_core::error::{Result, RidefareError};
use ridefare_core::ports::{Geocoder, PlaceCandidate};
use serde::Deserialize;

/// Nominatim-style geocoding adapter
pub struct NominatimGeocoder {
    /// Base URL of the search API (e.g., "https://nominatim.openstreetmap.org")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl NominatimGeocoder {
    /// Create a new geocoder against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create against the public OpenStreetMap instance
    pub fn openstreetmap() -> Self {
        Self::new("https://nominatim.openstreetmap.org")
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PlaceCandidate>> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("format", "json"),
                ("q", query),
                ("addressdetails", "1"),
                ("limit", &limit.to_string()),
            ])
            .header(reqwest::header::USER_AGENT, "ridefare/0.1")
            .send()
            .await
            .map_err(|e| RidefareError::GeocoderUnavailable {
                reason: format!("Failed to reach geocoding provider: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RidefareError::GeocoderUnavailable {
                reason: format!("Geocoding API error ({}): {}", status, error_text),
            });
        }

        let places: Vec<NominatimPlace> =
            response.json().await.map_err(|e| RidefareError::GeocoderUnavailable {
                reason: format!("Failed to parse geocoding response: {}", e),
            })?;

        tracing::debug!(count = places.len(), "geocoder candidates received");

        Ok(places
            .into_iter()
            .map(|p| PlaceCandidate {
                display_name: p.display_name,
                lat: p.lat,
                lon: p.lon,
                suburb: p.address.as_ref().and_then(|a| a.suburb.clone()),
                city: p.address.as_ref().and_then(|a| a.city.clone()),
            })
            .collect())
    }
}

/// One place record from the Nominatim search API
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
    address: Option<NominatimAddress>,
}

/// Address breakdown used for the compact display label
#[derive(Debug, Deserialize)]
struct NominatimAddress {
    suburb: Option<String>,
    city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoder_creation() {
        let geocoder = NominatimGeocoder::openstreetmap();
        assert_eq!(geocoder.base_url, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn test_place_parsing() {
        let json = r#"[{
            "display_name": "Dadar Station, Dadar West, Mumbai, Maharashtra, India",
            "lat": "19.0186",
            "lon": "72.8446",
            "address": {"suburb": "Dadar West", "city": "Mumbai"}
        }]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, "19.0186");
        assert_eq!(places[0].address.as_ref().unwrap().suburb.as_deref(), Some("Dadar West"));
    }

    #[test]
    fn test_place_parsing_without_address() {
        let json = r#"[{"display_name": "Somewhere", "lat": "19.0", "lon": "72.8"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert!(places[0].address.is_none());
    }
}
