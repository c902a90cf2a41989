//! Position providers: the device-fix contract and the network geolocation adapter.

use super::types::{Coordinate, PositionError};
use serde::Deserialize;
use std::time::Duration;

/// How a fix is requested from a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquireOptions {
    /// Ask the provider for its most precise fix.
    pub high_accuracy: bool,
    /// No response within this window is a failure.
    pub timeout: Duration,
    /// Maximum age of a reused fix. Zero forces a fresh fix on every call.
    pub max_age: Duration,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::ZERO,
        }
    }
}

/// Port for obtaining the current device position.
///
/// Implementations must honor `max_age = 0` by performing a fresh fix on
/// every call rather than replaying a cached one.
pub trait PositionProvider {
    fn current_position(&self, options: &AcquireOptions) -> Result<Coordinate, PositionError>;
}

// ─── Network geolocation adapter ────────────────────────────────

#[derive(Deserialize)]
struct GeoPayload {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Geolocation over the network (ipapi.co JSON endpoint).
///
/// Every call performs a full round trip, so nothing is ever reused and the
/// zero-cache-age contract holds by construction. Accuracy is whatever the
/// service can derive from the connection; `high_accuracy` has no stronger
/// mode to select here.
pub struct NetPositionProvider {
    endpoint: String,
}

impl NetPositionProvider {
    pub fn new() -> Self {
        Self::with_endpoint("https://ipapi.co/json/")
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for NetPositionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionProvider for NetPositionProvider {
    fn current_position(&self, options: &AcquireOptions) -> Result<Coordinate, PositionError> {
        let response = ureq::get(&self.endpoint)
            .set("User-Agent", "MuurePositioner/0.3")
            .timeout(options.timeout)
            .call()
            .map_err(classify_transport_error)?;

        let payload: GeoPayload = response
            .into_json()
            .map_err(|e| PositionError::InvalidResponse(e.to_string()))?;

        position_from_payload(payload)
    }
}

fn classify_transport_error(error: ureq::Error) -> PositionError {
    match error {
        ureq::Error::Status(403, _) => PositionError::PermissionDenied,
        ureq::Error::Status(code, _) => PositionError::Unavailable(format!("HTTP {}", code)),
        other => {
            // ureq reports the socket deadline as a transport I/O error.
            let msg = other.to_string();
            if msg.contains("timed out") {
                PositionError::Timeout
            } else {
                PositionError::Unavailable(msg)
            }
        }
    }
}

fn position_from_payload(payload: GeoPayload) -> Result<Coordinate, PositionError> {
    let lat = payload
        .latitude
        .ok_or_else(|| PositionError::InvalidResponse("no latitude".into()))?;
    let lon = payload
        .longitude
        .ok_or_else(|| PositionError::InvalidResponse("no longitude".into()))?;
    Coordinate::new(lat, lon).map_err(|e| PositionError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_options_force_fresh_high_accuracy_fix() {
        let opts = AcquireOptions::default();
        assert!(opts.high_accuracy);
        assert_eq!(opts.timeout, Duration::from_secs(10));
        assert_eq!(opts.max_age, Duration::ZERO);
    }

    #[test]
    fn test_payload_with_both_components() {
        let payload: GeoPayload =
            serde_json::from_str(r#"{"latitude": 37.7749, "longitude": -122.4194, "city": "SF"}"#)
                .unwrap();
        let fix = position_from_payload(payload).unwrap();
        assert_relative_eq!(fix.latitude, 37.7749);
        assert_relative_eq!(fix.longitude, -122.4194);
    }

    #[test]
    fn test_payload_missing_component() {
        let payload: GeoPayload = serde_json::from_str(r#"{"latitude": 37.7749}"#).unwrap();
        assert_eq!(
            position_from_payload(payload),
            Err(PositionError::InvalidResponse("no longitude".into()))
        );
    }

    #[test]
    fn test_payload_out_of_range_is_invalid() {
        let payload: GeoPayload =
            serde_json::from_str(r#"{"latitude": 123.0, "longitude": 10.0}"#).unwrap();
        assert!(matches!(
            position_from_payload(payload),
            Err(PositionError::InvalidResponse(_))
        ));
    }
}
