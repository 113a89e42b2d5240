// src/session/state.rs
use crate::domain::{Estimate, ListingRequest};

/// What one visitor's form currently shows.
///
/// Lifecycle: created on the first request without a session cookie,
/// mutated only by `observe` (every render) and `record_prediction` (the
/// predict action), dropped by the store once idle past its TTL.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Current form values.
    pub inputs: ListingRequest,
    /// Whether `estimate` still describes `inputs`.
    pub prediction_done: bool,
    estimate: Option<Estimate>,
    /// Form values at the moment of the last successful prediction.
    captured: Option<ListingRequest>,
    pub last_seen: i64,
}

impl SessionState {
    pub fn new(now: i64) -> Self {
        Self {
            last_seen: now,
            ..Self::default()
        }
    }

    /// Record the form values of a render pass. Any difference from the
    /// values captured at prediction time invalidates the prediction.
    /// Returns true when this call invalidated it.
    pub fn observe(&mut self, inputs: ListingRequest) -> bool {
        self.inputs = inputs;

        if self.prediction_done && self.captured != Some(inputs) {
            self.prediction_done = false;
            self.estimate = None;
            return true;
        }
        false
    }

    pub fn record_prediction(&mut self, estimate: Estimate) {
        self.captured = Some(estimate.request);
        self.inputs = estimate.request;
        self.estimate = Some(estimate);
        self.prediction_done = true;
    }

    /// The estimate to display, only while it is still valid.
    pub fn current_estimate(&self) -> Option<&Estimate> {
        if self.prediction_done {
            self.estimate.as_ref()
        } else {
            None
        }
    }

    pub fn touch(&mut self, now: i64) {
        self.last_seen = now;
    }
}
