//! # WellSense-Core
//!
//! Core types and utilities for the WellSense landmark analysis engine:
//! the landmark data model, the fixed pose/face keypoint topologies, the
//! planar geometry kernel shared by every analyzer, and the error type.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};
pub use geometry::*;
pub use types::*;
