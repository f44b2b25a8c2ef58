//! Vehicle tier catalog.
//!
//! Static pricing data, never mutated at runtime. The standard catalog
//! mirrors the operator's published rate card.

use crate::error::{Result, RidefareError};
use serde::{Deserialize, Serialize};

/// Vehicle class offered by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Hatchback,
    Sedan,
    Suv,
    /// Innova-class premium SUV / MUV
    BigSuv,
    Luxury,
    /// Tempo Traveller
    Bus,
    MiniBus,
}

/// A bookable vehicle tier with its pricing rule.
///
/// `price_per_km` and `base_fare` are whole currency units; no subunits
/// are modeled. `min_km_outstation`, when present, is the contractual
/// minimum billable distance for trips past the outstation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleTier {
    pub id: String,
    pub vehicle_type: VehicleType,
    pub name: String,
    pub price_per_km: u32,
    pub base_fare: u32,
    pub seats: u8,
    pub features: Vec<String>,
    pub min_km_outstation: Option<u32>,
}

impl VehicleTier {
    /// Validate catalog invariants. `base_fare` may be zero; a zero
    /// per-km rate never makes sense.
    pub fn validate(&self) -> Result<()> {
        if self.price_per_km == 0 {
            return Err(RidefareError::InvalidVehicleTier {
                name: self.name.clone(),
                reason: "price_per_km must be positive".to_string(),
            });
        }
        Ok(())
    }
}

fn tier(
    id: &str,
    vehicle_type: VehicleType,
    name: &str,
    price_per_km: u32,
    base_fare: u32,
    seats: u8,
    features: &[&str],
    min_km_outstation: Option<u32>,
) -> VehicleTier {
    VehicleTier {
        id: id.to_string(),
        vehicle_type,
        name: name.to_string(),
        price_per_km,
        base_fare,
        seats,
        features: features.iter().map(|f| f.to_string()).collect(),
        min_km_outstation,
    }
}

/// The operator's standard five-tier catalog.
pub fn standard_catalog() -> Vec<VehicleTier> {
    vec![
        tier(
            "v1",
            VehicleType::Hatchback,
            "Maruti WagonR / Indica",
            11,
            1200,
            4,
            &["AC", "Compact", "Budget Friendly"],
            Some(300),
        ),
        tier(
            "v2",
            VehicleType::Sedan,
            "Dzire / Xcent / City",
            14,
            2000,
            4,
            &["AC", "Comfortable", "Best for Outstation"],
            Some(300),
        ),
        tier(
            "v3",
            VehicleType::BigSuv,
            "Innova / Crysta / Ertiga",
            20,
            4000,
            7,
            &["Premium MUV", "Family Choice", "Spacious"],
            Some(300),
        ),
        tier(
            "v4",
            VehicleType::Bus,
            "Tempo Traveller",
            27,
            6500,
            12,
            &["Group Travel", "High Roof", "Music System"],
            Some(300),
        ),
        tier(
            "v5",
            VehicleType::Luxury,
            "Mercedes / BMW Chauffeur",
            80,
            10000,
            4,
            &["Elite Service", "Premium Leather", "Business Class"],
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = standard_catalog();
        assert_eq!(catalog.len(), 5);
        for v in &catalog {
            v.validate().unwrap();
        }
    }

    #[test]
    fn test_luxury_tier_has_no_outstation_minimum() {
        let catalog = standard_catalog();
        let luxury = catalog.iter().find(|v| v.vehicle_type == VehicleType::Luxury).unwrap();
        assert_eq!(luxury.min_km_outstation, None);
        assert_eq!(luxury.price_per_km, 80);
        assert_eq!(luxury.base_fare, 10000);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let mut v = standard_catalog().remove(0);
        v.price_per_km = 0;
        assert!(v.validate().is_err());
    }
}
