//! Resolved places and road-distance estimates.
//!
//! Coordinates are kept as decimal strings end to end. The geocoding
//! provider hands them over as strings, and keeping them that way avoids
//! float precision drift through serialization boundaries; `coords()` is
//! the single place where arithmetic consumers parse them.

use crate::error::{Result, RidefareError};
use serde::{Deserialize, Serialize};

/// A resolved, human-readable place with a geocoordinate.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationData {
    /// Full display name as returned by the geocoding provider
    pub name: String,
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
}

impl LocationData {
    pub fn new(
        name: impl Into<String>,
        lat: impl Into<String>,
        lon: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), lat: lat.into(), lon: lon.into() }
    }

    /// Parse the stored coordinate strings into `(lat, lon)`.
    pub fn coords(&self) -> Result<(f64, f64)> {
        let lat = self.lat.parse::<f64>().map_err(|_| RidefareError::InvalidCoordinate {
            field: "lat".to_string(),
            value: self.lat.clone(),
        })?;
        let lon = self.lon.parse::<f64>().map_err(|_| RidefareError::InvalidCoordinate {
            field: "lon".to_string(),
            value: self.lon.clone(),
        })?;
        Ok((lat, lon))
    }

    /// Compact label for dropdown-style rendering: first address segment,
    /// plus the suburb or city when one is known.
    pub fn short_label(&self, locality: Option<&str>) -> String {
        let head = self.name.split(',').next().unwrap_or(&self.name).trim();
        match locality {
            Some(locality) if !locality.is_empty() => format!("{}, {}", head, locality),
            _ => head.to_string(),
        }
    }
}

/// Settlement state of a road-distance estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceStatus {
    /// A routing request is outstanding; dependent steps must block
    Pending,
    /// The routing provider answered with a real road distance
    Resolved,
    /// The provider failed and the fixed fallback distance was substituted
    FallbackUsed,
}

/// A road distance in whole kilometers, tagged with how it was obtained.
///
/// Derived value; recomputed whenever either endpoint of a draft changes,
/// never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceEstimate {
    pub km: u32,
    pub status: DistanceStatus,
}

impl DistanceEstimate {
    /// Placeholder while a routing request is outstanding.
    pub fn pending() -> Self {
        Self { km: 0, status: DistanceStatus::Pending }
    }

    pub fn resolved(km: u32) -> Self {
        Self { km, status: DistanceStatus::Resolved }
    }

    pub fn fallback(km: u32) -> Self {
        Self { km, status: DistanceStatus::FallbackUsed }
    }

    pub fn is_pending(&self) -> bool {
        self.status == DistanceStatus::Pending
    }
}
