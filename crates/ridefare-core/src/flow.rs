//! The booking flow state machine.
//!
//! A strict linear Route -> Vehicle -> Review machine that owns one
//! [`BookingDraft`]. There is no backward transition; abandoning the
//! flow means dropping the controller, which discards the draft and any
//! outstanding work. Collaborators are injected at construction, so a
//! flow can be driven entirely by mocks in tests.

use crate::distance::DistanceEngine;
use crate::error::{Result, RidefareError};
use crate::fare;
use crate::handoff;
use crate::models::{
    BookingDraft, BookingStatus, DistanceEstimate, FinalizedBooking, FlowStep, UserProfile,
    VehicleTier,
};
use crate::ports::BookingLedger;
use crate::presets::PresetLocations;
use crate::resolver::ResolvedCandidate;
use chrono::Utc;
use std::sync::Arc;

/// A vehicle tier with its fare computed against the draft's current
/// distance, as listed on the vehicle step.
#[derive(Debug, Clone)]
pub struct VehicleQuote {
    pub tier: VehicleTier,
    pub fare: u32,
}

/// The result of a successful submission: the persisted booking plus the
/// dispatcher deep-link that constitutes the confirmation channel.
#[derive(Debug, Clone)]
pub struct SubmittedBooking {
    pub booking: FinalizedBooking,
    pub handoff_link: String,
}

/// Drives one booking from route entry to dispatcher hand-off.
pub struct BookingFlow {
    step: FlowStep,
    draft: BookingDraft,
    engine: Arc<DistanceEngine>,
    presets: Arc<PresetLocations>,
    ledger: Arc<dyn BookingLedger>,
    catalog: Vec<VehicleTier>,
    dispatch_number: String,
}

impl BookingFlow {
    pub fn new(
        engine: Arc<DistanceEngine>,
        presets: Arc<PresetLocations>,
        ledger: Arc<dyn BookingLedger>,
        catalog: Vec<VehicleTier>,
        dispatch_number: impl Into<String>,
    ) -> Self {
        Self {
            step: FlowStep::Route,
            draft: BookingDraft::default(),
            engine,
            presets,
            ledger,
            catalog,
            dispatch_number: dispatch_number.into(),
        }
    }

    /// Pre-fill the review step's contact fields from the active
    /// profile. Both remain editable.
    pub fn prefill_contact(&mut self, profile: &UserProfile) {
        self.draft.customer_name = profile.name.clone();
        self.draft.customer_phone = profile.phone.clone();
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Seed both endpoints from quick-route shortcut keys, bypassing the
    /// resolver entirely, then kick off the distance estimate.
    ///
    /// Unknown keys leave the corresponding endpoint as plain text for
    /// manual resolution.
    pub async fn seed_quick_route(&mut self, pickup_key: &str, drop_key: &str) -> Result<()> {
        self.ensure_not_submitted()?;

        match self.presets.lookup(pickup_key) {
            Some(loc) => {
                self.draft.pickup_text = loc.name.clone();
                self.draft.pickup = Some(loc.clone());
            }
            None => self.draft.pickup_text = pickup_key.to_string(),
        }

        match self.presets.lookup(drop_key) {
            Some(loc) => {
                self.draft.drop_text = loc.name.clone();
                self.draft.drop = Some(loc.clone());
            }
            None => self.draft.drop_text = drop_key.to_string(),
        }

        self.refresh_distance().await;
        Ok(())
    }

    /// Record raw pickup input. Typing invalidates the previously
    /// resolved endpoint and its distance.
    pub fn set_pickup_text(&mut self, text: impl Into<String>) {
        self.draft.pickup_text = text.into();
        self.draft.pickup = None;
        self.draft.distance = None;
    }

    /// Record raw drop input, invalidating the resolved endpoint.
    pub fn set_drop_text(&mut self, text: impl Into<String>) {
        self.draft.drop_text = text.into();
        self.draft.drop = None;
        self.draft.distance = None;
    }

    /// Resolve the pickup endpoint from a chosen candidate and refresh
    /// the distance if the route is now complete.
    pub async fn select_pickup(&mut self, candidate: ResolvedCandidate) {
        self.draft.pickup_text = candidate.short_label;
        self.draft.pickup = Some(candidate.location);
        self.refresh_distance().await;
    }

    /// Resolve the drop endpoint from a chosen candidate.
    pub async fn select_drop(&mut self, candidate: ResolvedCandidate) {
        self.draft.drop_text = candidate.short_label;
        self.draft.drop = Some(candidate.location);
        self.refresh_distance().await;
    }

    /// Recompute the distance estimate when both endpoints are resolved.
    ///
    /// Each recompute takes a fresh sequence number from the engine; a
    /// result is applied only while its sequence is still the newest, so
    /// a stale estimate can never overwrite one for a newer endpoint
    /// pair.
    async fn refresh_distance(&mut self) {
        let (Some(pickup), Some(drop)) = (self.draft.pickup.clone(), self.draft.drop.clone())
        else {
            return;
        };

        let sequence = self.engine.next_sequence();
        self.draft.distance = Some(DistanceEstimate::pending());

        let estimate = self.engine.estimate(&pickup, &drop).await;

        if self.engine.current_sequence() == sequence {
            self.draft.distance = Some(estimate);
        } else {
            tracing::debug!(sequence, "stale distance estimate discarded");
        }
    }

    /// Distance in km if the estimate has settled.
    pub fn settled_distance_km(&self) -> Option<u32> {
        self.draft.distance.filter(|d| !d.is_pending()).map(|d| d.km)
    }

    /// Fares for every catalog tier against the current distance.
    pub fn quotes(&self) -> Vec<VehicleQuote> {
        let distance = self.settled_distance_km();
        self.catalog
            .iter()
            .map(|tier| VehicleQuote { tier: tier.clone(), fare: fare::fare(tier, distance) })
            .collect()
    }

    /// Select a vehicle tier by catalog id.
    pub fn select_vehicle(&mut self, id: &str) -> Result<()> {
        self.ensure_not_submitted()?;
        let tier = self.catalog.iter().find(|v| v.id == id).ok_or_else(|| {
            RidefareError::InvalidVehicleTier {
                name: id.to_string(),
                reason: "not in catalog".to_string(),
            }
        })?;
        self.draft.selected_vehicle = Some(tier.clone());
        Ok(())
    }

    pub fn set_customer(&mut self, name: impl Into<String>, phone: impl Into<String>) {
        self.draft.customer_name = name.into();
        self.draft.customer_phone = phone.into();
    }

    /// Whether the review step's submit guard is satisfied.
    pub fn can_submit(&self) -> bool {
        !self.draft.customer_name.trim().is_empty()
            && self.draft.customer_phone.trim().len() >= 10
    }

    /// Advance to the next step if the current step's exit guard holds.
    pub fn advance(&mut self) -> Result<FlowStep> {
        match self.step {
            FlowStep::Route => {
                if !self.draft.route_resolved() {
                    return Err(RidefareError::RouteIncomplete);
                }
                if self.draft.distance.is_some_and(|d| d.is_pending()) {
                    return Err(RidefareError::DistancePending);
                }
                self.step = FlowStep::Vehicle;
            }
            FlowStep::Vehicle => {
                if self.draft.selected_vehicle.is_none() {
                    return Err(RidefareError::NoVehicleSelected);
                }
                self.step = FlowStep::Review;
            }
            FlowStep::Review => return Err(RidefareError::SubmitRequired),
            FlowStep::Submitted => return Err(RidefareError::FlowSubmitted),
        }
        Ok(self.step)
    }

    /// Finalize the booking: snapshot the draft, persist it, and render
    /// the dispatcher hand-off link. Terminal; the flow accepts no
    /// further input afterwards.
    pub async fn submit(&mut self) -> Result<SubmittedBooking> {
        if self.step == FlowStep::Submitted {
            return Err(RidefareError::FlowSubmitted);
        }
        if self.step != FlowStep::Review {
            return Err(RidefareError::InvalidContact {
                reason: "submission is only possible from the review step".to_string(),
            });
        }
        if !self.can_submit() {
            return Err(RidefareError::InvalidContact {
                reason: "name must be non-empty and phone at least 10 digits".to_string(),
            });
        }
        let vehicle =
            self.draft.selected_vehicle.clone().ok_or(RidefareError::NoVehicleSelected)?;
        let distance_km =
            self.settled_distance_km().ok_or(RidefareError::DistancePending)?;

        let booking = FinalizedBooking {
            id: uuid::Uuid::new_v4().to_string(),
            customer_name: self.draft.customer_name.trim().to_string(),
            customer_phone: self.draft.customer_phone.trim().to_string(),
            pickup: self.draft.pickup_text.clone(),
            drop: self.draft.drop_text.clone(),
            vehicle_name: vehicle.name.clone(),
            fare: fare::fare(&vehicle, Some(distance_km)),
            distance_km,
            created_at: Utc::now(),
            status: BookingStatus::Pending,
        };

        self.ledger.append(booking.clone()).await?;
        let handoff_link = handoff::booking_request_link(&self.dispatch_number, &booking);

        tracing::info!(booking_id = %booking.id, fare = booking.fare, "booking submitted");
        self.step = FlowStep::Submitted;

        Ok(SubmittedBooking { booking, handoff_link })
    }

    fn ensure_not_submitted(&self) -> Result<()> {
        if self.step == FlowStep::Submitted {
            return Err(RidefareError::FlowSubmitted);
        }
        Ok(())
    }
}
