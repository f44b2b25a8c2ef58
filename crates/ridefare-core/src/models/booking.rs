//! Booking drafts and finalized bookings.

use crate::models::{DistanceEstimate, LocationData, VehicleTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three user-visible steps of the booking flow, plus the terminal
/// submitted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowStep {
    Route,
    Vehicle,
    Review,
    /// Terminal; re-entering the flow starts a fresh draft
    Submitted,
}

/// In-flight booking state, owned exclusively by one flow instance.
///
/// Created empty (or pre-seeded from a quick-route shortcut), mutated by
/// each step's input, and either converted into a [`FinalizedBooking`] on
/// submission or discarded wholesale when the flow is abandoned.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub pickup_text: String,
    pub drop_text: String,
    pub pickup: Option<LocationData>,
    pub drop: Option<LocationData>,
    pub distance: Option<DistanceEstimate>,
    pub selected_vehicle: Option<VehicleTier>,
    pub customer_name: String,
    pub customer_phone: String,
}

impl BookingDraft {
    pub fn route_resolved(&self) -> bool {
        self.pickup.is_some() && self.drop.is_some()
    }
}

/// Out-of-band confirmation state of a persisted booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

/// A submitted booking, persisted by the ledger.
///
/// Snapshots the vehicle name, fare, and distance at submission time; it
/// never references live catalog entries, so later pricing changes do not
/// retroactively alter history. Never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedBooking {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup: String,
    pub drop: String,
    pub vehicle_name: String,
    pub fare: u32,
    pub distance_km: u32,
    pub created_at: DateTime<Utc>,
    pub status: BookingStatus,
}

/// Customer identity offered as default values for the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
}
