//! Free-text location resolution.
//!
//! Turns a typed query into a ranked set of candidate places via the
//! geocoding port. Provider failures degrade to an empty candidate set;
//! the caller simply stays unresolved and the user retypes. Nothing here
//! is ever fatal to the flow.

use crate::models::LocationData;
use crate::ports::Geocoder;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Queries shorter than this never trigger a lookup. Short queries
/// produce noisy candidate sets, so this is a contract, not a tuning
/// knob.
pub const MIN_QUERY_LEN: usize = 3;

/// Upper bound on candidates requested per lookup.
pub const MAX_CANDIDATES: usize = 5;

/// A geocoder candidate paired with its compact display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCandidate {
    pub location: LocationData,
    /// First address segment plus suburb/city, for dropdown rendering
    pub short_label: String,
}

/// Resolves free-text queries against a geocoding provider, biased to
/// the service's operating region.
pub struct LocationResolver {
    geocoder: Arc<dyn Geocoder>,
    region_bias: String,
}

impl LocationResolver {
    pub fn new(geocoder: Arc<dyn Geocoder>, region_bias: impl Into<String>) -> Self {
        Self { geocoder, region_bias: region_bias.into() }
    }

    /// Resolve a query into ranked candidates, at most [`MAX_CANDIDATES`].
    ///
    /// Queries under [`MIN_QUERY_LEN`] characters return empty without
    /// touching the provider. Provider errors are logged and degrade to
    /// an empty set.
    pub async fn resolve(&self, query: &str) -> Vec<ResolvedCandidate> {
        let query = query.trim();
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let biased = format!("{}, {}", query, self.region_bias);
        tracing::debug!(query = %biased, "dispatching geocoder lookup");

        match self.geocoder.search(&biased, MAX_CANDIDATES).await {
            Ok(candidates) => candidates
                .into_iter()
                .take(MAX_CANDIDATES)
                .map(|c| {
                    let location = LocationData::new(c.display_name, c.lat, c.lon);
                    let locality = c.suburb.or(c.city);
                    let short_label = location.short_label(locality.as_deref());
                    ResolvedCandidate { location, short_label }
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "geocoder lookup failed, clearing candidates");
                Vec::new()
            }
        }
    }
}

/// Debounced front end for [`LocationResolver`].
///
/// Each keystroke bumps a generation counter and schedules a lookup
/// after a silence window. The scheduled task re-checks the counter
/// before dispatching (a newer keystroke cancels the schedule) and again
/// after the response arrives (a late response for a stale query is
/// discarded, so the last query by intent always wins).
pub struct DebouncedResolver {
    resolver: Arc<LocationResolver>,
    debounce: Duration,
    generation: Arc<AtomicU64>,
}

impl DebouncedResolver {
    pub fn new(resolver: Arc<LocationResolver>, debounce: Duration) -> Self {
        Self { resolver, debounce, generation: Arc::new(AtomicU64::new(0)) }
    }

    /// Feed one input edit. Returns `None` when this edit was superseded
    /// by a newer one, `Some(candidates)` when it was the latest.
    pub async fn input(&self, query: &str) -> Option<Vec<ResolvedCandidate>> {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Short queries clear the candidate list immediately; the
        // generation bump above still invalidates any older pending
        // lookup.
        if query.trim().len() < MIN_QUERY_LEN {
            return Some(Vec::new());
        }

        tokio::time::sleep(self.debounce).await;
        if self.generation.load(Ordering::SeqCst) != my_generation {
            tracing::debug!(query, "lookup superseded before dispatch");
            return None;
        }

        let candidates = self.resolver.resolve(query).await;

        // An already-dispatched call is not aborted, but its result must
        // not clobber a newer query's state.
        if self.generation.load(Ordering::SeqCst) != my_generation {
            tracing::debug!(query, "stale geocoder response discarded");
            return None;
        }

        Some(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, RidefareError};
    use crate::ports::PlaceCandidate;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// Geocoder that counts calls and returns a scripted candidate set.
    struct ScriptedGeocoder {
        calls: AtomicUsize,
        candidates: Vec<PlaceCandidate>,
        fail: bool,
    }

    impl ScriptedGeocoder {
        fn with_candidates(candidates: Vec<PlaceCandidate>) -> Self {
            Self { calls: AtomicUsize::new(0), candidates, fail: false }
        }

        fn failing() -> Self {
            Self { calls: AtomicUsize::new(0), candidates: Vec::new(), fail: true }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Geocoder for ScriptedGeocoder {
        async fn search(&self, _query: &str, limit: usize) -> Result<Vec<PlaceCandidate>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RidefareError::GeocoderUnavailable {
                    reason: "scripted failure".to_string(),
                });
            }
            Ok(self.candidates.iter().take(limit).cloned().collect())
        }
    }

    fn candidate(name: &str, suburb: Option<&str>) -> PlaceCandidate {
        PlaceCandidate {
            display_name: name.to_string(),
            lat: "19.0".to_string(),
            lon: "72.8".to_string(),
            suburb: suburb.map(str::to_string),
            city: Some("Mumbai".to_string()),
        }
    }

    #[tokio::test]
    async fn test_short_query_never_calls_provider() {
        let geocoder = Arc::new(ScriptedGeocoder::with_candidates(vec![candidate(
            "Andheri Station, Mumbai",
            None,
        )]));
        let resolver = LocationResolver::new(geocoder.clone(), "Maharashtra");

        assert!(resolver.resolve("ab").await.is_empty());
        assert!(resolver.resolve("  a  ").await.is_empty());
        assert!(resolver.resolve("").await.is_empty());
        assert_eq!(geocoder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_resolve_maps_candidates_with_short_labels() {
        let geocoder = Arc::new(ScriptedGeocoder::with_candidates(vec![
            candidate("Dadar Station, Dadar West, Mumbai", Some("Dadar West")),
            candidate("Dadar Market, Mumbai", None),
        ]));
        let resolver = LocationResolver::new(geocoder, "Maharashtra");

        let results = resolver.resolve("Dadar").await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].short_label, "Dadar Station, Dadar West");
        // No suburb: falls back to the city
        assert_eq!(results[1].short_label, "Dadar Market, Mumbai");
        assert_eq!(results[0].location.name, "Dadar Station, Dadar West, Mumbai");
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_empty() {
        let geocoder = Arc::new(ScriptedGeocoder::failing());
        let resolver = LocationResolver::new(geocoder.clone(), "Maharashtra");

        assert!(resolver.resolve("Dadar").await.is_empty());
        assert_eq!(geocoder.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_only_latest_query_dispatches() {
        let geocoder = Arc::new(ScriptedGeocoder::with_candidates(vec![candidate(
            "Panvel Station, Panvel",
            None,
        )]));
        let resolver = Arc::new(LocationResolver::new(geocoder.clone(), "Maharashtra"));
        let debounced = Arc::new(DebouncedResolver::new(resolver, Duration::from_millis(500)));

        let first = {
            let debounced = debounced.clone();
            tokio::spawn(async move { debounced.input("Pan").await })
        };
        // Let the first edit start its silence window, then supersede it.
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = {
            let debounced = debounced.clone();
            tokio::spawn(async move { debounced.input("Panvel").await })
        };

        assert_eq!(first.await.unwrap(), None);
        let results = second.await.unwrap().unwrap();
        assert_eq!(results.len(), 1);
        // The superseded edit never reached the provider.
        assert_eq!(geocoder.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_short_query_clears_immediately() {
        let geocoder = Arc::new(ScriptedGeocoder::with_candidates(Vec::new()));
        let resolver = Arc::new(LocationResolver::new(geocoder.clone(), "Maharashtra"));
        let debounced = DebouncedResolver::new(resolver, Duration::from_millis(500));

        // Settles without any time advance.
        assert_eq!(debounced.input("ab").await, Some(Vec::new()));
        assert_eq!(geocoder.call_count(), 0);
    }
}
