pub mod types;
pub mod http;

pub use types::*;
pub use http::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Prediction service is not reachable at {0}")]
    Connection(String),

    #[error("Prediction request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Prediction service returned error (status {status}): {body}")]
    ServiceError { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}
