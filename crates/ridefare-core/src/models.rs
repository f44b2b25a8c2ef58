pub mod booking;
pub mod location;
pub mod vehicle;

pub use booking::{BookingDraft, BookingStatus, FinalizedBooking, FlowStep, UserProfile};
pub use location::{DistanceEstimate, DistanceStatus, LocationData};
pub use vehicle::{VehicleTier, VehicleType};
