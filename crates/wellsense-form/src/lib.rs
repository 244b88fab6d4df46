//! # WellSense-Form
//!
//! Rule-based body analysis on 33-point pose frames.
//!
//! ## Components
//!
//! - **Exercise form**: per-exercise rule tables score a frame from 100 down,
//!   listing one correction per violated rule. Scores of 70 or more count as
//!   good form.
//! - **Repetitions**: push-ups and squats are counted on the descent, and
//!   only when the bottom frame shows good form.
//! - **Desk posture**: a seated front-facing frame is checked for level
//!   shoulders and hips, head position and torso height.

pub mod analyzer;
pub mod exercise;
pub mod posture;
pub mod reps;
pub mod rules;

#[cfg(test)]
mod fixtures;

pub use analyzer::*;
pub use exercise::*;
pub use posture::*;
pub use reps::*;
pub use rules::{FormRule, Violation};
