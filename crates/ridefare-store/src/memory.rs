//! In-memory storage implementations for development and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock
//! poisoning only occurs when another thread panicked while holding the
//! lock, which is an unrecoverable state. For durable storage, use the
//! JSON file backend.

use async_trait::async_trait;
use ridefare_core::error::Result;
use ridefare_core::models::{FinalizedBooking, UserProfile};
use ridefare_core::ports::{BookingLedger, ProfileStore};
use std::sync::{Arc, RwLock};

/// In-memory implementation of BookingLedger
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    bookings: Arc<RwLock<Vec<FinalizedBooking>>>,
}

impl MemoryLedger {
    /// Create a new in-memory ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of bookings across all customers
    pub fn len(&self) -> usize {
        self.bookings.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookingLedger for MemoryLedger {
    async fn append(&self, booking: FinalizedBooking) -> Result<()> {
        // Newest first, matching the trips listing order
        self.bookings.write().unwrap().insert(0, booking);
        Ok(())
    }

    async fn list_for_phone(&self, phone: &str) -> Result<Vec<FinalizedBooking>> {
        let bookings = self.bookings.read().unwrap();
        Ok(bookings.iter().filter(|b| b.customer_phone == phone).cloned().collect())
    }
}

/// In-memory implementation of ProfileStore
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profile: Arc<RwLock<Option<UserProfile>>>,
}

impl MemoryProfileStore {
    /// Create a new in-memory profile store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.profile.read().unwrap().clone())
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        *self.profile.write().unwrap() = Some(profile.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.profile.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ridefare_core::models::BookingStatus;

    fn booking(phone: &str, fare: u32) -> FinalizedBooking {
        FinalizedBooking {
            id: uuid::Uuid::new_v4().to_string(),
            customer_name: "Test Customer".to_string(),
            customer_phone: phone.to_string(),
            pickup: "Mumbai (Gateway of India)".to_string(),
            drop: "Pune (Railway Station)".to_string(),
            vehicle_name: "Dzire / Xcent / City".to_string(),
            fare,
            distance_km: 150,
            created_at: Utc::now(),
            status: BookingStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_ledger_filters_by_phone() {
        let ledger = MemoryLedger::new();
        ledger.append(booking("9820012345", 4200)).await.unwrap();
        ledger.append(booking("9820099999", 2000)).await.unwrap();
        ledger.append(booking("9820012345", 6500)).await.unwrap();

        let trips = ledger.list_for_phone("9820012345").await.unwrap();
        assert_eq!(trips.len(), 2);
        assert!(trips.iter().all(|b| b.customer_phone == "9820012345"));
        assert_eq!(ledger.len(), 3);
    }

    #[tokio::test]
    async fn test_ledger_lists_newest_first() {
        let ledger = MemoryLedger::new();
        ledger.append(booking("9820012345", 1000)).await.unwrap();
        ledger.append(booking("9820012345", 2000)).await.unwrap();

        let trips = ledger.list_for_phone("9820012345").await.unwrap();
        assert_eq!(trips[0].fare, 2000);
        assert_eq!(trips[1].fare, 1000);
    }

    #[tokio::test]
    async fn test_profile_roundtrip_and_clear() {
        let store = MemoryProfileStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        let profile =
            UserProfile { name: "Asha Kulkarni".to_string(), phone: "9820012345".to_string() };
        store.save(&profile).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(profile));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
