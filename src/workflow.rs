//! Location capture workflow.
//!
//! One controller, two input sources. The controller owns the screen state
//! (coordinate, busy flag, status line, acquisition error), orchestrates the
//! position provider and the coordinate store, and notifies an observer
//! after every state change so a presentation layer can redraw.

use crate::position::{AcquireOptions, Coordinate, CoordinateError, PositionProvider};
use crate::store::CoordinateStore;
use std::fmt;
use std::sync::Arc;

/// Confirmation shown after a successful submission.
pub const MSG_UPDATED: &str = "Coordinates updated successfully!";
/// Shown when the sensor variant is asked to submit before any fix landed.
pub const MSG_NEED_PERMISSION: &str =
    "Location not available yet. Please enable location permissions and refresh.";

/// Where the screen is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Acquiring,
    Located,
    Submitting,
    AcquisitionFailed,
}

// ─── Manual entry ───────────────────────────────────────────────

/// Validation failures for keyboard input. Detected locally, never reach
/// the network.
#[derive(Debug, PartialEq)]
pub enum EntryError {
    Missing,
    NotANumber,
    OutOfRange(CoordinateError),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Please enter both latitude and longitude"),
            Self::NotANumber => write!(f, "Please enter valid numbers"),
            Self::OutOfRange(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EntryError {}

/// The two text fields of the manual variant.
#[derive(Debug, Clone, Default)]
pub struct ManualEntry {
    pub latitude_field: String,
    pub longitude_field: String,
}

impl ManualEntry {
    /// Turn the fields into a reading: both present, both numeric, in range.
    pub fn parse(&self) -> Result<Coordinate, EntryError> {
        let lat_text = self.latitude_field.trim();
        let lon_text = self.longitude_field.trim();
        if lat_text.is_empty() || lon_text.is_empty() {
            return Err(EntryError::Missing);
        }
        let lat: f64 = lat_text.parse().map_err(|_| EntryError::NotANumber)?;
        let lon: f64 = lon_text.parse().map_err(|_| EntryError::NotANumber)?;
        Coordinate::new(lat, lon).map_err(|e| match e {
            CoordinateError::NonFinite => EntryError::NotANumber,
            out_of_range => EntryError::OutOfRange(out_of_range),
        })
    }

    fn clear(&mut self) {
        self.latitude_field.clear();
        self.longitude_field.clear();
    }
}

// ─── Input source ───────────────────────────────────────────────

/// Pluggable input source: keyboard entry or a device fix.
pub enum InputSource {
    Manual(ManualEntry),
    Sensor {
        provider: Box<dyn PositionProvider + Send>,
        options: AcquireOptions,
    },
}

impl InputSource {
    fn is_sensor(&self) -> bool {
        matches!(self, Self::Sensor { .. })
    }

    fn fix(&self) -> Option<Result<Coordinate, crate::position::PositionError>> {
        match self {
            Self::Manual(_) => None,
            Self::Sensor { provider, options } => Some(provider.current_position(options)),
        }
    }
}

// ─── Controller ─────────────────────────────────────────────────

/// Observer-visible copy of the controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub coordinate: Option<Coordinate>,
    pub busy: bool,
    pub status: Option<String>,
    pub location_error: Option<String>,
}

/// How a submit call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The insert went through.
    Completed,
    /// The insert was attempted and failed; carries the store's message.
    Failed(String),
    /// Rejected locally before any network call; carries the message shown.
    Rejected(String),
    /// A submission was already in flight; nothing happened.
    Busy,
}

type Observer = Box<dyn FnMut(&Snapshot) + Send>;

/// The location workflow controller.
///
/// All state is transient and process-local; rebuilding the controller is
/// the screen-reload analog.
pub struct Workflow {
    source: InputSource,
    store: Arc<dyn CoordinateStore + Send + Sync>,
    coordinate: Option<Coordinate>,
    busy: bool,
    status: Option<String>,
    location_error: Option<String>,
    phase: Phase,
    observer: Option<Observer>,
}

impl Workflow {
    pub fn new(source: InputSource, store: Arc<dyn CoordinateStore + Send + Sync>) -> Self {
        Self {
            source,
            store,
            coordinate: None,
            busy: false,
            status: None,
            location_error: None,
            phase: Phase::Uninitialized,
            observer: None,
        }
    }

    /// Manual variant: two empty text fields, no reading.
    pub fn manual(store: Arc<dyn CoordinateStore + Send + Sync>) -> Self {
        Self::new(InputSource::Manual(ManualEntry::default()), store)
    }

    /// Sensor variant: fresh high-accuracy fixes with a 10 s timeout.
    pub fn sensor(
        provider: Box<dyn PositionProvider + Send>,
        store: Arc<dyn CoordinateStore + Send + Sync>,
    ) -> Self {
        Self::new(
            InputSource::Sensor {
                provider,
                options: AcquireOptions::default(),
            },
            store,
        )
    }

    pub fn with_observer(mut self, observer: impl FnMut(&Snapshot) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Screen-activation hook. The sensor variant starts its first fix here.
    pub fn activate(&mut self) {
        if self.source.is_sensor() {
            self.refresh_position();
        }
    }

    /// Ask the input source for a fresh fix. No-op for the manual variant.
    ///
    /// Success stores the reading and clears the acquisition error; failure
    /// stores the error and leaves any previous reading untouched. The
    /// status line is never cleared here.
    pub fn refresh_position(&mut self) {
        if !self.source.is_sensor() {
            return;
        }
        self.phase = Phase::Acquiring;
        self.notify();

        if let Some(result) = self.source.fix() {
            match result {
                Ok(fix) => {
                    self.coordinate = Some(fix);
                    self.location_error = None;
                    self.phase = Phase::Located;
                }
                Err(e) => {
                    self.location_error = Some(e.to_string());
                    self.phase = Phase::AcquisitionFailed;
                }
            }
            self.notify();
        }
    }

    /// Submit the current reading to the store.
    ///
    /// At most one submission is in flight at a time; the busy flag is reset
    /// on every completion path before the outcome is inspected.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.busy {
            return SubmitOutcome::Busy;
        }

        // Resolve what to send first: local rejections never set the busy
        // flag and never reach the network.
        let record = match &self.source {
            InputSource::Manual(entry) => match entry.parse() {
                Ok(reading) => reading,
                Err(e) => {
                    let message = e.to_string();
                    self.status = Some(message.clone());
                    self.notify();
                    return SubmitOutcome::Rejected(message);
                }
            },
            InputSource::Sensor { .. } => match self.coordinate {
                Some(reading) => reading,
                None => {
                    self.status = Some(MSG_NEED_PERMISSION.into());
                    self.notify();
                    return SubmitOutcome::Rejected(MSG_NEED_PERMISSION.into());
                }
            },
        };

        self.coordinate = Some(record);
        self.busy = true;
        self.status = None;
        self.phase = Phase::Submitting;
        self.notify();

        let result = self.store.insert(record);

        // Unconditional: a failed insert must not leave the screen disabled.
        self.busy = false;
        self.phase = Phase::Located;

        let outcome = match result {
            Ok(()) => {
                self.status = Some(MSG_UPDATED.into());
                if let InputSource::Manual(entry) = &mut self.source {
                    // Back to the "no reading" state.
                    entry.clear();
                    self.coordinate = None;
                    self.phase = Phase::Uninitialized;
                }
                SubmitOutcome::Completed
            }
            Err(e) => {
                let message = e.to_string();
                self.status = Some(format!("Error: {}", message));
                SubmitOutcome::Failed(message)
            }
        };
        self.notify();
        outcome
    }

    pub fn set_latitude_field(&mut self, text: impl Into<String>) {
        if let InputSource::Manual(entry) = &mut self.source {
            entry.latitude_field = text.into();
            self.notify();
        }
    }

    pub fn set_longitude_field(&mut self, text: impl Into<String>) {
        if let InputSource::Manual(entry) = &mut self.source {
            entry.longitude_field = text.into();
            self.notify();
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            coordinate: self.coordinate,
            busy: self.busy,
            status: self.status.clone(),
            location_error: self.location_error.clone(),
        }
    }

    fn notify(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer(&self.snapshot());
            self.observer = Some(observer);
        }
    }
}
