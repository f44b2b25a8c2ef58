//! Ridefare Providers - HTTP adapters for the external geocoding and
//! routing services.

pub mod nominatim;
pub mod osrm;

pub use nominatim::NominatimGeocoder;
pub use osrm::OsrmRoutePlanner;
