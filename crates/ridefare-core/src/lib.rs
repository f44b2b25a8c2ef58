//! Ridefare Core - Domain models, fare engine, and booking flow
//!
//! This crate contains the fare-quoting and route-distance pipeline and
//! the port definitions its adapters implement.

pub mod config;
pub mod distance;
pub mod error;
pub mod fare;
pub mod flow;
pub mod handoff;
pub mod models;
pub mod ports;
pub mod presets;
pub mod resolver;

pub use error::{Result, RidefareError};
