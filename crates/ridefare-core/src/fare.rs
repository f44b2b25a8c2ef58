//! Fare calculation.
//!
//! Pure tiered pricing over a vehicle's rate rule and a road distance.
//! Trips past [`OUTSTATION_THRESHOLD_KM`] are outstation; for tiers that
//! carry a contractual outstation minimum, the billable distance is
//! clamped up to that minimum and the base fare is not charged at all.
//! The two branches are intentionally discontinuous at the boundary for
//! such tiers; this matches the operator's published behavior and must
//! not be "unified" into a single curve.
//!
//! All inputs are whole units (km, currency), so every product here is
//! exact integer arithmetic and no rounding step is needed.

use crate::models::VehicleTier;

/// Distance above which a trip is billed as outstation.
pub const OUTSTATION_THRESHOLD_KM: u32 = 80;

/// Estimated total fare for a vehicle tier over a road distance.
///
/// With no distance available, the base fare stands in as a placeholder
/// floor. Idempotent: the same `(vehicle, distance)` pair always yields
/// the same integer.
pub fn fare(vehicle: &VehicleTier, distance_km: Option<u32>) -> u32 {
    let Some(distance_km) = distance_km else {
        return vehicle.base_fare;
    };

    let outstation = distance_km > OUTSTATION_THRESHOLD_KM;
    if outstation {
        if let Some(min_km) = vehicle.min_km_outstation {
            let billable_km = distance_km.max(min_km);
            return billable_km * vehicle.price_per_km;
        }
    }

    // Local trips (and outstation tiers without a minimum): the first
    // 80 km are covered by the flat base fare, only the excess is
    // charged per kilometer.
    let excess_km = distance_km.saturating_sub(OUTSTATION_THRESHOLD_KM);
    vehicle.base_fare + excess_km * vehicle.price_per_km
}

/// True when the distance classifies a trip as outstation.
pub fn is_outstation(distance_km: u32) -> bool {
    distance_km > OUTSTATION_THRESHOLD_KM
}
