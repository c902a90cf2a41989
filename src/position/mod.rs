//! Position subsystem for Muure Positioner.
//!
//! Holds the coordinate entity, the provider contract for obtaining the
//! current device position, and the shipped network geolocation adapter.

pub mod provider;
pub mod types;

pub use provider::{AcquireOptions, NetPositionProvider, PositionProvider};
pub use types::{Coordinate, CoordinateError, PositionError};
