//! Error types for the WellSense analysis engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Insufficient landmarks: need {required} points, have {available}")]
    InsufficientLandmarks { required: usize, available: usize },

    #[error("Unknown exercise type: {0}")]
    UnknownExercise(String),

    #[error("Landmark detector not ready")]
    DetectorNotReady,

    #[error("Landmark provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
