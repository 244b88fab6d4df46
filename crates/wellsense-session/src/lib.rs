//! # WellSense-Session
//!
//! Drives the analyzers from a stream of video frames.
//!
//! ## Flow
//!
//! ```text
//! host frame ──▶ AnalysisSession::tick
//!                    │
//!                    ├─ LandmarkProvider::detect  (pose or face)
//!                    │
//!                    ├─ Mood      ─▶ ExpressionClassifier ─▶ History
//!                    ├─ Exercise  ─▶ form rules + rep counter
//!                    └─ Posture   ─▶ posture assessment   ─▶ History
//! ```
//!
//! The session must be initialized (detector ready) before it can start.
//! Starting or switching modes clears reps and history.

pub mod config;
pub mod history;
pub mod provider;
pub mod session;

pub use config::*;
pub use history::*;
pub use provider::*;
pub use session::*;
