//! Geometric pose builders shared by the analyzer tests.
//!
//! Each builder returns a frame that passes every rule of its exercise;
//! tests then move individual keypoints to break exactly the rules they
//! target.

use wellsense_core::{Landmark, PoseFrame, PoseKeypoint, POSE_LANDMARK_COUNT};

use PoseKeypoint::*;

/// Point `length` away from `origin` along `heading` (degrees, image axes)
pub fn polar(origin: Landmark, heading: f64, length: f64) -> Landmark {
    let r = heading.to_radians();
    Landmark::xy(origin.x + length * r.cos(), origin.y + length * r.sin())
}

/// Vertex that sees `p` and `q` under `degrees`, on the side picked by `side` (±1)
pub fn apex(p: Landmark, q: Landmark, degrees: f64, side: f64) -> Landmark {
    let (dx, dy) = (q.x - p.x, q.y - p.y);
    let chord = (dx * dx + dy * dy).sqrt();
    let height = (chord / 2.0) / (degrees / 2.0).to_radians().tan();
    let (nx, ny) = (-dy / chord * side, dx / chord * side);
    Landmark::xy(
        (p.x + q.x) / 2.0 + nx * height,
        (p.y + q.y) / 2.0 + ny * height,
    )
}

pub fn shifted(landmark: Landmark, dx: f64) -> Landmark {
    Landmark::xy(landmark.x + dx, landmark.y)
}

pub fn pose(points: &[(PoseKeypoint, Landmark)]) -> PoseFrame {
    let mut frame = PoseFrame::new(vec![Landmark::xy(0.5, 0.5); POSE_LANDMARK_COUNT]).unwrap();
    for (keypoint, landmark) in points {
        frame.set(*keypoint, *landmark);
    }
    frame
}

/// Horizontal push-up: straight body line, hips 0.02 below the shoulders,
/// hands exactly shoulder-width apart, both elbows at `elbow_angle`.
pub fn push_up(elbow_angle: f64) -> PoseFrame {
    let (ls, rs) = (Landmark::xy(0.30, 0.40), Landmark::xy(0.40, 0.40));
    let (lw, rw) = (Landmark::xy(0.30, 0.60), Landmark::xy(0.40, 0.60));
    pose(&[
        (LeftShoulder, ls),
        (RightShoulder, rs),
        (LeftWrist, lw),
        (RightWrist, rw),
        (LeftElbow, apex(ls, lw, elbow_angle, 1.0)),
        (RightElbow, apex(rs, rw, elbow_angle, -1.0)),
        (LeftHip, Landmark::xy(0.55, 0.42)),
        (RightHip, Landmark::xy(0.65, 0.42)),
        (LeftAnkle, Landmark::xy(0.80, 0.44)),
        (RightAnkle, Landmark::xy(0.90, 0.44)),
    ])
}

/// Crunched sit-up with both knees at `knee_angle`
pub fn sit_up(knee_angle: f64) -> PoseFrame {
    let (hip, ankle) = (Landmark::xy(0.50, 0.70), Landmark::xy(0.80, 0.75));
    let knee = apex(hip, ankle, knee_angle, -1.0);
    let shoulder = Landmark::xy(0.55, 0.45);
    pose(&[
        (Nose, Landmark::xy(0.60, 0.35)),
        (LeftShoulder, shoulder),
        (RightShoulder, shifted(shoulder, 0.02)),
        (LeftHip, hip),
        (RightHip, shifted(hip, 0.02)),
        (LeftKnee, knee),
        (RightKnee, shifted(knee, 0.02)),
        (LeftAnkle, ankle),
        (RightAnkle, shifted(ankle, 0.02)),
    ])
}

/// Side-on squat built from segment headings around the left knee; the
/// right side is the left side shifted 0.1 to the right.
pub fn squat(knee_to_hip: f64, knee_to_ankle: f64, hip_to_shoulder: f64) -> PoseFrame {
    let knee = Landmark::xy(0.50, 0.60);
    let hip = polar(knee, knee_to_hip, 0.2);
    let ankle = polar(knee, knee_to_ankle, 0.25);
    let shoulder = polar(hip, hip_to_shoulder, 0.3);
    pose(&[
        (LeftShoulder, shoulder),
        (RightShoulder, shifted(shoulder, 0.1)),
        (LeftHip, hip),
        (RightHip, shifted(hip, 0.1)),
        (LeftKnee, knee),
        (RightKnee, shifted(knee, 0.1)),
        (LeftAnkle, ankle),
        (RightAnkle, shifted(ankle, 0.1)),
    ])
}

/// Squat at 105° knee bend with the torso leaning 30° off vertical
pub fn good_squat() -> PoseFrame {
    squat(210.0, 105.0, -120.0)
}

/// Forearm plank with a perfectly straight, level body
pub fn plank() -> PoseFrame {
    let shoulder = Landmark::xy(0.10, 0.50);
    let elbow = Landmark::xy(0.10, 0.65);
    let hip = Landmark::xy(0.50, 0.50);
    let ankle = Landmark::xy(0.90, 0.50);
    pose(&[
        (LeftShoulder, shoulder),
        (RightShoulder, shifted(shoulder, 0.02)),
        (LeftElbow, elbow),
        (RightElbow, shifted(elbow, 0.02)),
        (LeftHip, hip),
        (RightHip, shifted(hip, 0.02)),
        (LeftAnkle, ankle),
        (RightAnkle, shifted(ankle, 0.02)),
    ])
}

/// Upright seated pose facing the camera
pub fn seated() -> PoseFrame {
    pose(&[
        (Nose, Landmark::xy(0.50, 0.25)),
        (LeftShoulder, Landmark::xy(0.40, 0.40)),
        (RightShoulder, Landmark::xy(0.60, 0.40)),
        (LeftHip, Landmark::xy(0.42, 0.75)),
        (RightHip, Landmark::xy(0.58, 0.75)),
    ])
}

#[test]
fn apex_builds_requested_angle() {
    let (p, q) = (Landmark::xy(0.2, 0.3), Landmark::xy(0.5, 0.7));
    for degrees in [60.0, 95.0, 130.0] {
        let vertex = apex(p, q, degrees, 1.0);
        let measured = wellsense_core::angle(&p, &vertex, &q);
        assert!((measured - degrees).abs() < 1e-9, "{} vs {}", measured, degrees);
    }
}
