use crate::store::CoordinateStore;
use crate::workflow::Workflow;
use std::sync::{Arc, Mutex};

pub struct AppState {
    /// Sensor-variant workflow behind the position endpoint.
    pub workflow: Mutex<Workflow>,
    /// Shared store handle for manual submissions.
    pub store: Arc<dyn CoordinateStore + Send + Sync>,
}
