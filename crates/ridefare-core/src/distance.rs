//! Road-distance estimation.
//!
//! Wraps the routing port with the availability-over-accuracy policy:
//! every failure mode (network error, malformed response, missing route,
//! unparsable coordinates, timeout) degrades to a fixed fallback
//! distance marked [`DistanceStatus::FallbackUsed`], so fare computation
//! can always proceed.

use crate::models::{DistanceEstimate, LocationData};
use crate::ports::RoutePlanner;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Distance substituted when the routing provider is unreachable.
pub const DEFAULT_FALLBACK_KM: u32 = 35;

/// Obtains real driving distances between resolved endpoints.
pub struct DistanceEngine {
    planner: Arc<dyn RoutePlanner>,
    fallback_km: u32,
    timeout: Duration,
    sequence: AtomicU64,
}

impl DistanceEngine {
    pub fn new(planner: Arc<dyn RoutePlanner>, fallback_km: u32, timeout: Duration) -> Self {
        Self { planner, fallback_km, timeout, sequence: AtomicU64::new(0) }
    }

    pub fn with_defaults(planner: Arc<dyn RoutePlanner>) -> Self {
        Self::new(planner, DEFAULT_FALLBACK_KM, Duration::from_secs(8))
    }

    /// Issue a new request sequence number. A caller holding an older
    /// number must discard its result; the newest endpoint pair wins.
    pub fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The most recently issued sequence number.
    pub fn current_sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Driving distance between two resolved endpoints, in whole
    /// kilometers. Infallible by design: failures yield the fallback.
    pub async fn estimate(
        &self,
        origin: &LocationData,
        destination: &LocationData,
    ) -> DistanceEstimate {
        let (origin_coords, dest_coords) = match (origin.coords(), destination.coords()) {
            (Ok(o), Ok(d)) => (o, d),
            _ => {
                tracing::warn!(
                    origin = %origin.name,
                    destination = %destination.name,
                    "unparsable endpoint coordinates, using fallback distance"
                );
                return DistanceEstimate::fallback(self.fallback_km);
            }
        };

        // Routing providers take lon/lat order.
        let origin_lonlat = (origin_coords.1, origin_coords.0);
        let dest_lonlat = (dest_coords.1, dest_coords.0);

        let request = self.planner.driving_distance_meters(origin_lonlat, dest_lonlat);
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(meters)) => {
                let km = (meters / 1000.0).round() as u32;
                tracing::debug!(km, "route distance resolved");
                DistanceEstimate::resolved(km)
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "routing provider failed, using fallback distance");
                DistanceEstimate::fallback(self.fallback_km)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "routing request timed out, using fallback distance"
                );
                DistanceEstimate::fallback(self.fallback_km)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, RidefareError};
    use crate::models::DistanceStatus;
    use async_trait::async_trait;

    struct FixedPlanner {
        meters: f64,
    }

    #[async_trait]
    impl RoutePlanner for FixedPlanner {
        async fn driving_distance_meters(
            &self,
            _origin: (f64, f64),
            _destination: (f64, f64),
        ) -> Result<f64> {
            Ok(self.meters)
        }
    }

    struct FailingPlanner;

    #[async_trait]
    impl RoutePlanner for FailingPlanner {
        async fn driving_distance_meters(
            &self,
            _origin: (f64, f64),
            _destination: (f64, f64),
        ) -> Result<f64> {
            Err(RidefareError::RouteUnavailable { reason: "scripted failure".to_string() })
        }
    }

    struct HangingPlanner;

    #[async_trait]
    impl RoutePlanner for HangingPlanner {
        async fn driving_distance_meters(
            &self,
            _origin: (f64, f64),
            _destination: (f64, f64),
        ) -> Result<f64> {
            std::future::pending().await
        }
    }

    fn mumbai() -> LocationData {
        LocationData::new("Mumbai (Gateway of India)", "18.9220", "72.8347")
    }

    fn shirdi() -> LocationData {
        LocationData::new("Shirdi (Sai Baba Temple)", "19.7645", "74.4762")
    }

    #[tokio::test]
    async fn test_meters_rounded_to_whole_km() {
        let engine = DistanceEngine::with_defaults(Arc::new(FixedPlanner { meters: 241_650.0 }));
        let estimate = engine.estimate(&mumbai(), &shirdi()).await;
        assert_eq!(estimate.km, 242);
        assert_eq!(estimate.status, DistanceStatus::Resolved);
    }

    #[tokio::test]
    async fn test_rounds_down_below_half() {
        let engine = DistanceEngine::with_defaults(Arc::new(FixedPlanner { meters: 241_400.0 }));
        let estimate = engine.estimate(&mumbai(), &shirdi()).await;
        assert_eq!(estimate.km, 241);
    }

    #[tokio::test]
    async fn test_provider_failure_uses_fallback() {
        let engine = DistanceEngine::with_defaults(Arc::new(FailingPlanner));
        let estimate = engine.estimate(&mumbai(), &shirdi()).await;
        assert_eq!(estimate.km, DEFAULT_FALLBACK_KM);
        assert_eq!(estimate.status, DistanceStatus::FallbackUsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_provider_times_out_to_fallback() {
        let engine = DistanceEngine::new(
            Arc::new(HangingPlanner),
            DEFAULT_FALLBACK_KM,
            Duration::from_secs(8),
        );
        let estimate = engine.estimate(&mumbai(), &shirdi()).await;
        assert_eq!(estimate.km, 35);
        assert_eq!(estimate.status, DistanceStatus::FallbackUsed);
    }

    #[tokio::test]
    async fn test_unparsable_coordinates_use_fallback() {
        let engine = DistanceEngine::with_defaults(Arc::new(FixedPlanner { meters: 1000.0 }));
        let bad = LocationData::new("Nowhere", "??", "72.8");
        let estimate = engine.estimate(&bad, &shirdi()).await;
        assert_eq!(estimate.status, DistanceStatus::FallbackUsed);
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let engine = DistanceEngine::with_defaults(Arc::new(FailingPlanner));
        let a = engine.next_sequence();
        let b = engine.next_sequence();
        assert!(b > a);
        assert_eq!(engine.current_sequence(), b);
    }
}
