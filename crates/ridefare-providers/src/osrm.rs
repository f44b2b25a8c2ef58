use async_trait::async_trait;
use ridefare_core::error::{Result, RidefareError};
use ridefare_core::ports::RoutePlanner;
use serde::Deserialize;

/// OSRM-style road-routing adapter
///
/// Requests use the driving profile with geometry disabled; only the
/// total route distance is consumed.
pub struct OsrmRoutePlanner {
    /// Base URL of the routing API (e.g., "https://router.project-osrm.org")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OsrmRoutePlanner {
    /// Create a new route planner against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create against the public OSRM demo instance
    pub fn public() -> Self {
        Self::new("https://router.project-osrm.org")
    }
}

#[async_trait]
impl RoutePlanner for OsrmRoutePlanner {
    async fn driving_distance_meters(
        &self,
        origin: (f64, f64),
        destination: (f64, f64),
    ) -> Result<f64> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.base_url, origin.0, origin.1, destination.0, destination.1
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            RidefareError::RouteUnavailable {
                reason: format!("Failed to reach routing provider: {}", e),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RidefareError::RouteUnavailable {
                reason: format!("Routing API error ({}): {}", status, error_text),
            });
        }

        let route_response: OsrmRouteResponse =
            response.json().await.map_err(|e| RidefareError::RouteUnavailable {
                reason: format!("Failed to parse routing response: {}", e),
            })?;

        let route = route_response.routes.into_iter().next().ok_or_else(|| {
            RidefareError::NoRoute {
                origin: format!("{},{}", origin.0, origin.1),
                destination: format!("{},{}", destination.0, destination.1),
            }
        })?;

        tracing::debug!(meters = route.distance, "route distance received");
        Ok(route.distance)
    }
}

/// Response from the OSRM route API
#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

/// One route alternative; only the total distance is used
#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_creation() {
        let planner = OsrmRoutePlanner::public();
        assert_eq!(planner.base_url, "https://router.project-osrm.org");
    }

    #[test]
    fn test_route_parsing() {
        let json = r#"{"code":"Ok","routes":[{"distance":241650.3,"duration":14980.2}]}"#;
        let response: OsrmRouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.routes.len(), 1);
        assert!((response.routes[0].distance - 241650.3).abs() < 1e-6);
    }

    #[test]
    fn test_missing_routes_field() {
        let json = r#"{"code":"NoRoute"}"#;
        let response: OsrmRouteResponse = serde_json::from_str(json).unwrap();
        assert!(response.routes.is_empty());
    }
}
