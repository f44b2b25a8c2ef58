//! JSON-file storage.
//!
//! One JSON document holds the active profile and the full booking
//! history. Bookings are stored globally and filtered per phone on
//! read, so switching profiles keeps every customer's history intact.
//! Writes go through a temp file and rename so a crash mid-write never
//! truncates the document.

use async_trait::async_trait;
use ridefare_core::error::{Result, RidefareError};
use ridefare_core::models::{FinalizedBooking, UserProfile};
use ridefare_core::ports::{BookingLedger, ProfileStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// On-disk document layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileState {
    profile: Option<UserProfile>,
    #[serde(default)]
    bookings: Vec<FinalizedBooking>,
}

/// File-backed implementation of both BookingLedger and ProfileStore
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    state: Arc<RwLock<FileState>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing document. A missing
    /// file starts empty and is created on first write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|e| RidefareError::Serialization(e.to_string()))?
        } else {
            FileState::default()
        };
        Ok(Self { path, state: Arc::new(RwLock::new(state)) })
    }

    fn persist(&self) -> Result<()> {
        let content = {
            let state = self.state.read().unwrap();
            serde_json::to_string_pretty(&*state)
                .map_err(|e| RidefareError::Serialization(e.to_string()))?
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "store persisted");
        Ok(())
    }
}

#[async_trait]
impl BookingLedger for JsonFileStore {
    async fn append(&self, booking: FinalizedBooking) -> Result<()> {
        self.state.write().unwrap().bookings.insert(0, booking);
        self.persist()
    }

    async fn list_for_phone(&self, phone: &str) -> Result<Vec<FinalizedBooking>> {
        let state = self.state.read().unwrap();
        Ok(state.bookings.iter().filter(|b| b.customer_phone == phone).cloned().collect())
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.state.read().unwrap().profile.clone())
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        self.state.write().unwrap().profile = Some(profile.clone());
        self.persist()
    }

    async fn clear(&self) -> Result<()> {
        self.state.write().unwrap().profile = None;
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ridefare_core::models::BookingStatus;
    use tempfile::tempdir;

    fn booking(phone: &str) -> FinalizedBooking {
        FinalizedBooking {
            id: uuid::Uuid::new_v4().to_string(),
            customer_name: "Test Customer".to_string(),
            customer_phone: phone.to_string(),
            pickup: "Mumbai (Gateway of India)".to_string(),
            drop: "Shirdi (Sai Baba Temple)".to_string(),
            vehicle_name: "Innova / Crysta / Ertiga".to_string(),
            fare: 6000,
            distance_km: 242,
            created_at: Utc::now(),
            status: BookingStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_bookings_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ridefare.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.append(booking("9820012345")).await.unwrap();
            store.append(booking("9820099999")).await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        let trips = reopened.list_for_phone("9820012345").await.unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].customer_phone, "9820012345");
    }

    #[tokio::test]
    async fn test_profile_survives_reopen_and_clear() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ridefare.json");

        let profile =
            UserProfile { name: "Asha Kulkarni".to_string(), phone: "9820012345".to_string() };
        {
            let store = JsonFileStore::open(&path).unwrap();
            store.save(&profile).await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.load().await.unwrap(), Some(profile));

        reopened.clear().await.unwrap();
        let after_clear = JsonFileStore::open(&path).unwrap();
        assert_eq!(after_clear.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clearing_profile_keeps_bookings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ridefare.json");

        let store = JsonFileStore::open(&path).unwrap();
        store
            .save(&UserProfile {
                name: "Asha Kulkarni".to_string(),
                phone: "9820012345".to_string(),
            })
            .await
            .unwrap();
        store.append(booking("9820012345")).await.unwrap();
        store.clear().await.unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.list_for_phone("9820012345").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.list_for_phone("9820012345").await.unwrap().is_empty());
        assert_eq!(store.load().await.unwrap(), None);
    }
}
