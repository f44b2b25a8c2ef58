//! Error types for ridefare

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RidefareError {
    // Provider errors
    #[error("Geocoder unavailable: {reason}")]
    GeocoderUnavailable { reason: String },

    #[error("Route planner unavailable: {reason}")]
    RouteUnavailable { reason: String },

    #[error("No route found between {origin} and {destination}")]
    NoRoute { origin: String, destination: String },

    // Model errors
    #[error("Invalid coordinate '{value}' for {field}")]
    InvalidCoordinate { field: String, value: String },

    #[error("Invalid vehicle tier '{name}': {reason}")]
    InvalidVehicleTier { name: String, reason: String },

    // Flow errors
    #[error("Route step incomplete: both pickup and drop must be resolved")]
    RouteIncomplete,

    #[error("Distance estimate still pending")]
    DistancePending,

    #[error("No vehicle selected")]
    NoVehicleSelected,

    #[error("Invalid contact details: {reason}")]
    InvalidContact { reason: String },

    #[error("Review step exits via submit(), not advance()")]
    SubmitRequired,

    #[error("Booking flow already submitted")]
    FlowSubmitted,

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, RidefareError>;
