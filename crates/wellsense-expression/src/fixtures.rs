//! Synthetic face meshes for the classifier tests.
//!
//! Every point sits at the frame centre except the handful the classifier
//! reads. The mouth is 0.2 wide and 0.05 tall (ratio 4.0) with its corners
//! at y 0.60; the chin sits at y 0.85.

use wellsense_core::{FaceKeypoint, Landmark, LandmarkFrame, FACE_LANDMARK_COUNT};

use FaceKeypoint::*;

pub fn set(frame: &mut LandmarkFrame, keypoint: FaceKeypoint, x: f64, y: f64) {
    frame.0[keypoint.index()] = Landmark::xy(x, y);
}

/// Face with the nose tip at `nose_y` and both eyebrows at `brow_y`
pub fn face(nose_y: f64, brow_y: f64) -> LandmarkFrame {
    let mut frame = LandmarkFrame::new(vec![Landmark::xy(0.5, 0.5); FACE_LANDMARK_COUNT]);
    set(&mut frame, LeftMouthCorner, 0.40, 0.60);
    set(&mut frame, RightMouthCorner, 0.60, 0.60);
    set(&mut frame, UpperLipCenter, 0.50, 0.575);
    set(&mut frame, LowerLipCenter, 0.50, 0.625);
    set(&mut frame, NoseTip, 0.50, nose_y);
    set(&mut frame, LeftEyebrow, 0.40, brow_y);
    set(&mut frame, RightEyebrow, 0.60, brow_y);
    set(&mut frame, Chin, 0.50, 0.85);
    frame
}

/// Corners 0.08 above the nose tip reference, wide mouth
pub fn smiling() -> LandmarkFrame {
    face(0.68, 0.25)
}

/// Eyebrow ratio 0.5, corners below the nose tip
pub fn neutral() -> LandmarkFrame {
    face(0.45, 0.25)
}

/// Eyebrow ratio 0.35
pub fn sad() -> LandmarkFrame {
    face(0.45, 0.31)
}

/// Eyebrow ratio 0.25
pub fn stressed() -> LandmarkFrame {
    face(0.45, 0.35)
}

pub fn truncated() -> LandmarkFrame {
    LandmarkFrame::new(vec![Landmark::xy(0.5, 0.5); 100])
}
