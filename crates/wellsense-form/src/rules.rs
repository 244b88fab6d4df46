//! Per-exercise rule tables.
//!
//! A rule inspects one pose frame and either passes or reports a single
//! [`Violation`]: the correction shown to the user and the points it costs.
//! Rules run in table order, which is also the order corrections are listed.
//!
//! | Exercise | Rule | Penalty |
//! |----------|------|---------|
//! | push-up | elbow angle outside 70–110° | 15 |
//! | push-up | body line outside 160–200° | 20 |
//! | push-up | hips more than 0.1 below shoulders | 15 |
//! | push-up | hand span outside 0.8–1.3× shoulder span | 10 |
//! | sit-up | knee angle outside 70–110° | 15 |
//! | sit-up | shoulders more than 0.3 from knees | 20 |
//! | sit-up | neck angle below 30° | 15 |
//! | squat | knee angle above 110° / below 70° | 20 / 10 |
//! | squat | knee more than 0.1 ahead of or behind ankle | 15 |
//! | squat | back angle below 140° | 15 |
//! | squat | stance below 0.8× shoulder span | 10 |
//! | plank | body line outside 160–200° | 25 |
//! | plank | hips more than 0.05 off the shoulder–ankle line | 20 |
//! | plank | elbow more than 0.1 from under the shoulder | 15 |

use serde::Serialize;

use wellsense_core::{angle, distance, mean_angle, midpoint, Landmark, PoseFrame, PoseKeypoint};

use PoseKeypoint::*;

/// A failed rule: what to tell the user and what it costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub correction: &'static str,
    pub penalty: u32,
}

impl Violation {
    const fn new(correction: &'static str, penalty: u32) -> Self {
        Self {
            correction,
            penalty,
        }
    }
}

/// One entry of an exercise's rule table
#[derive(Clone, Copy)]
pub struct FormRule {
    pub name: &'static str,
    pub evaluate: fn(&PoseFrame) -> Option<Violation>,
}

impl FormRule {
    pub fn check(&self, frame: &PoseFrame) -> Option<Violation> {
        (self.evaluate)(frame)
    }
}

impl std::fmt::Debug for FormRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRule").field("name", &self.name).finish()
    }
}

pub static PUSH_UP_RULES: &[FormRule] = &[
    FormRule {
        name: "elbow_angle",
        evaluate: push_up_elbow_angle,
    },
    FormRule {
        name: "body_line",
        evaluate: push_up_body_line,
    },
    FormRule {
        name: "hip_sag",
        evaluate: push_up_hip_sag,
    },
    FormRule {
        name: "hand_width",
        evaluate: push_up_hand_width,
    },
];

pub static SIT_UP_RULES: &[FormRule] = &[
    FormRule {
        name: "knee_angle",
        evaluate: sit_up_knee_angle,
    },
    FormRule {
        name: "crunch_height",
        evaluate: sit_up_crunch_height,
    },
    FormRule {
        name: "neck_angle",
        evaluate: sit_up_neck_angle,
    },
];

pub static SQUAT_RULES: &[FormRule] = &[
    FormRule {
        name: "depth",
        evaluate: squat_depth,
    },
    FormRule {
        name: "knee_tracking",
        evaluate: squat_knee_tracking,
    },
    FormRule {
        name: "back_angle",
        evaluate: squat_back_angle,
    },
    FormRule {
        name: "stance_width",
        evaluate: squat_stance_width,
    },
];

pub static PLANK_RULES: &[FormRule] = &[
    FormRule {
        name: "body_line",
        evaluate: plank_body_line,
    },
    FormRule {
        name: "hip_height",
        evaluate: plank_hip_height,
    },
    FormRule {
        name: "elbow_stack",
        evaluate: plank_elbow_stack,
    },
];

// ----------------------------------------------------------------------------
// Measurements
// ----------------------------------------------------------------------------

fn joint_angle(frame: &PoseFrame, a: PoseKeypoint, b: PoseKeypoint, c: PoseKeypoint) -> f64 {
    angle(frame.get(a), frame.get(b), frame.get(c))
}

fn elbow_angle(frame: &PoseFrame) -> f64 {
    mean_angle(
        joint_angle(frame, LeftShoulder, LeftElbow, LeftWrist),
        joint_angle(frame, RightShoulder, RightElbow, RightWrist),
    )
}

fn knee_angle(frame: &PoseFrame) -> f64 {
    mean_angle(
        joint_angle(frame, LeftHip, LeftKnee, LeftAnkle),
        joint_angle(frame, RightHip, RightKnee, RightAnkle),
    )
}

fn body_line_angle(frame: &PoseFrame) -> f64 {
    mean_angle(
        joint_angle(frame, LeftShoulder, LeftHip, LeftAnkle),
        joint_angle(frame, RightShoulder, RightHip, RightAnkle),
    )
}

fn mid(frame: &PoseFrame, left: PoseKeypoint, right: PoseKeypoint) -> Landmark {
    midpoint(frame.get(left), frame.get(right))
}

fn span(frame: &PoseFrame, left: PoseKeypoint, right: PoseKeypoint) -> f64 {
    distance(frame.get(left), frame.get(right))
}

fn horizontal_offset(frame: &PoseFrame, a: PoseKeypoint, b: PoseKeypoint) -> f64 {
    (frame.get(a).x - frame.get(b).x).abs()
}

fn body_line_broken(frame: &PoseFrame) -> bool {
    let body = body_line_angle(frame);
    body < 160.0 || body > 200.0
}

// ----------------------------------------------------------------------------
// Push-up
// ----------------------------------------------------------------------------

fn push_up_elbow_angle(frame: &PoseFrame) -> Option<Violation> {
    let elbow = elbow_angle(frame);
    (elbow < 70.0 || elbow > 110.0).then_some(Violation::new("bend elbows to 90°", 15))
}

fn push_up_body_line(frame: &PoseFrame) -> Option<Violation> {
    body_line_broken(frame).then_some(Violation::new("keep body straight", 20))
}

fn push_up_hip_sag(frame: &PoseFrame) -> Option<Violation> {
    let hips = mid(frame, LeftHip, RightHip);
    let shoulders = mid(frame, LeftShoulder, RightShoulder);
    (hips.y > shoulders.y + 0.1).then_some(Violation::new("lift hips", 15))
}

fn push_up_hand_width(frame: &PoseFrame) -> Option<Violation> {
    let hands = span(frame, LeftWrist, RightWrist);
    let shoulders = span(frame, LeftShoulder, RightShoulder);
    (hands < shoulders * 0.8 || hands > shoulders * 1.3)
        .then_some(Violation::new("adjust hand width", 10))
}

// ----------------------------------------------------------------------------
// Sit-up
// ----------------------------------------------------------------------------

fn sit_up_knee_angle(frame: &PoseFrame) -> Option<Violation> {
    let knee = knee_angle(frame);
    (knee < 70.0 || knee > 110.0).then_some(Violation::new("bend knees to 90°", 15))
}

fn sit_up_crunch_height(frame: &PoseFrame) -> Option<Violation> {
    let shoulders = mid(frame, LeftShoulder, RightShoulder);
    let knees = mid(frame, LeftKnee, RightKnee);
    (distance(&shoulders, &knees) > 0.3).then_some(Violation::new("come up higher", 20))
}

fn sit_up_neck_angle(frame: &PoseFrame) -> Option<Violation> {
    let neck = joint_angle(frame, Nose, LeftShoulder, LeftHip);
    (neck < 30.0).then_some(Violation::new("keep neck neutral", 15))
}

// ----------------------------------------------------------------------------
// Squat
// ----------------------------------------------------------------------------

fn squat_depth(frame: &PoseFrame) -> Option<Violation> {
    let knee = knee_angle(frame);
    if knee > 110.0 {
        Some(Violation::new("squat deeper", 20))
    } else if knee < 70.0 {
        Some(Violation::new("don't go too low", 10))
    } else {
        None
    }
}

fn squat_knee_tracking(frame: &PoseFrame) -> Option<Violation> {
    let left = horizontal_offset(frame, LeftKnee, LeftAnkle);
    let right = horizontal_offset(frame, RightKnee, RightAnkle);
    (left > 0.1 || right > 0.1).then_some(Violation::new("keep knees behind toes", 15))
}

fn squat_back_angle(frame: &PoseFrame) -> Option<Violation> {
    let back = angle(
        &mid(frame, LeftShoulder, RightShoulder),
        &mid(frame, LeftHip, RightHip),
        &mid(frame, LeftKnee, RightKnee),
    );
    (back < 140.0).then_some(Violation::new("keep chest up", 15))
}

fn squat_stance_width(frame: &PoseFrame) -> Option<Violation> {
    let feet = span(frame, LeftAnkle, RightAnkle);
    let shoulders = span(frame, LeftShoulder, RightShoulder);
    (feet < shoulders * 0.8).then_some(Violation::new("widen stance", 10))
}

// ----------------------------------------------------------------------------
// Plank
// ----------------------------------------------------------------------------

fn plank_body_line(frame: &PoseFrame) -> Option<Violation> {
    body_line_broken(frame).then_some(Violation::new("keep body straight", 25))
}

fn plank_hip_height(frame: &PoseFrame) -> Option<Violation> {
    let hips = mid(frame, LeftHip, RightHip);
    let shoulders = mid(frame, LeftShoulder, RightShoulder);
    let ankles = mid(frame, LeftAnkle, RightAnkle);
    let offset = hips.y - (shoulders.y + ankles.y) / 2.0;

    // Image y grows downward: hips below the line are sagging
    let correction = if offset > 0.05 {
        "lower hips, don't let them sag"
    } else if offset < -0.05 {
        "lower hips, don't pike up"
    } else {
        return None;
    };
    Some(Violation::new(correction, 20))
}

fn plank_elbow_stack(frame: &PoseFrame) -> Option<Violation> {
    let left = horizontal_offset(frame, LeftElbow, LeftShoulder);
    let right = horizontal_offset(frame, RightElbow, RightShoulder);
    (left > 0.1 || right > 0.1).then_some(Violation::new("elbows under shoulders", 15))
}
