//! Repetition counting on top of per-frame form feedback.
//!
//! A rep is credited on the descent, and only when the frame that reaches
//! the bottom position was scored as good form. The ascent is unconditional
//! so a sloppy bottom cannot wedge the counter in `Down`.

use serde::{Deserialize, Serialize};

use wellsense_core::{PoseFrame, PoseKeypoint};

use crate::exercise::FormFeedback;

/// Elbow-to-shoulder vertical offsets below this mean the body is down
pub const DOWN_OFFSET_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepPosition {
    #[default]
    Up,
    Down,
}

impl RepPosition {
    pub fn from_offset(vertical_offset: f64) -> Self {
        if vertical_offset < DOWN_OFFSET_THRESHOLD {
            RepPosition::Down
        } else {
            RepPosition::Up
        }
    }
}

/// Session-scoped rep state machine: `Up ⇄ Down`, counting on good-form descents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepCounter {
    last_position: RepPosition,
    count: u32,
}

impl RepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one cycle's feedback and vertical offset.
    ///
    /// Returns `true` when this observation credited a rep.
    pub fn observe(&mut self, feedback: &FormFeedback, vertical_offset: f64) -> bool {
        match (self.last_position, RepPosition::from_offset(vertical_offset)) {
            (RepPosition::Up, RepPosition::Down) if feedback.is_good_form => {
                self.count += 1;
                self.last_position = RepPosition::Down;
                true
            }
            (RepPosition::Down, RepPosition::Up) => {
                self.last_position = RepPosition::Up;
                false
            }
            _ => false,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn last_position(&self) -> RepPosition {
        self.last_position
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Vertical distance between the left elbow and left shoulder
pub fn rep_signal(frame: &PoseFrame) -> f64 {
    (frame.get(PoseKeypoint::LeftElbow).y - frame.get(PoseKeypoint::LeftShoulder).y).abs()
}
