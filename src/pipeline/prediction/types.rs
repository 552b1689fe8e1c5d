use serde::Serialize;

use super::PredictionError;
use crate::models::{CanonicalRequest, Domain};

/// What the prediction service answered for one request.
///
/// The body is kept as raw JSON: its shape belongs to the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionVerdict {
    pub domain: Domain,
    pub status: u16,
    pub body: serde_json::Value,
}

/// Prediction service abstraction (allows mocking for tests)
pub trait PredictionClient {
    fn predict(&self, request: &CanonicalRequest) -> Result<PredictionVerdict, PredictionError>;
}
