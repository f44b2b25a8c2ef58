//! Persistence ports

use crate::error::Result;
use crate::models::{FinalizedBooking, UserProfile};
use async_trait::async_trait;

/// Port for the append-only booking ledger.
///
/// Bookings are stored globally and filtered per customer phone on read;
/// the ledger never mutates a booking after it is appended.
#[async_trait]
pub trait BookingLedger: Send + Sync {
    /// Append a finalized booking.
    async fn append(&self, booking: FinalizedBooking) -> Result<()>;

    /// All bookings made with the given phone number, newest first.
    async fn list_for_phone(&self, phone: &str) -> Result<Vec<FinalizedBooking>>;
}

/// Port for the active user profile, read at session start and offered
/// as editable defaults for the review step.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load(&self) -> Result<Option<UserProfile>>;

    async fn save(&self, profile: &UserProfile) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}
