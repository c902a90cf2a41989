//! Core types for the position subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate reading in decimal degrees.
///
/// Constructed only through [`Coordinate::new`], so a held value is always
/// finite and in range. The workflow keeps it in an `Option`: either a full
/// reading exists or none does, the components are never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Why a pair of numbers is not a valid reading.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    NonFinite,
    Latitude(f64),
    Longitude(f64),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "Coordinates must be finite numbers"),
            Self::Latitude(v) => write!(f, "Latitude {} is out of range (-90 to 90)", v),
            Self::Longitude(v) => write!(f, "Longitude {} is out of range (-180 to 180)", v),
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Acquisition failures, as reported by a position provider.
///
/// Deliberately coarse: a permanent permission denial and a transient
/// timeout both surface as a message string and a later refresh may retry
/// either. No finer retry policy exists.
#[derive(Debug, PartialEq)]
pub enum PositionError {
    PermissionDenied,
    Timeout,
    Unavailable(String),
    InvalidResponse(String),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "Location permission denied"),
            Self::Timeout => write!(f, "No position fix within the timeout"),
            Self::Unavailable(msg) => write!(f, "Position unavailable: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid position response: {}", msg),
        }
    }
}

impl std::error::Error for PositionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coordinate_in_range() {
        let c = Coordinate::new(59.3293, 18.0686).unwrap();
        assert_relative_eq!(c.latitude, 59.3293);
        assert_relative_eq!(c.longitude, 18.0686);
    }

    #[test]
    fn test_coordinate_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert_eq!(
            Coordinate::new(90.5, 0.0),
            Err(CoordinateError::Latitude(90.5))
        );
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert_eq!(
            Coordinate::new(0.0, -180.01),
            Err(CoordinateError::Longitude(-180.01))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            Coordinate::new(f64::NAN, 0.0),
            Err(CoordinateError::NonFinite)
        );
        assert_eq!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(CoordinateError::NonFinite)
        );
    }

    #[test]
    fn test_display_keeps_precision() {
        let c = Coordinate::new(37.7749, -122.4194).unwrap();
        let line = c.to_string();
        assert!(line.contains("37.7749"));
        assert!(line.contains("-122.4194"));
    }
}
