//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement. The
//! flow controller and its collaborators are constructed with explicit
//! handles to implementations; nothing is looked up from ambient scope.

pub mod geo;
pub mod store;

pub use geo::{Geocoder, PlaceCandidate, RoutePlanner};
pub use store::{BookingLedger, ProfileStore};
