//! Fundamental types for the WellSense analysis engine.

use chrono::{DateTime, Utc};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Number of points in a full body-pose frame
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Number of points in a full face-mesh frame (iris-refined meshes carry 478)
pub const FACE_LANDMARK_COUNT: usize = 468;

/// Identifier for one analysis session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp wrapper with nanosecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_nanos_opt().unwrap_or(0))
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Detectors report frame times in milliseconds
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(1_000_000))
    }

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    pub fn as_millis(&self) -> i64 {
        self.0 / 1_000_000
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.0)
    }
}

/// A single normalized keypoint from a pose or face detector.
///
/// `x` and `y` are in `[0, 1]` relative to frame width/height, `z` is
/// relative depth. `visibility` is only reported by pose detectors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }

    /// Planar point, depth dropped
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn to_point2(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

/// One ordered set of landmarks for one video instant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkFrame(pub Vec<Landmark>);

impl LandmarkFrame {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self(landmarks)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.0
    }
}

impl From<Vec<Landmark>> for LandmarkFrame {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self(landmarks)
    }
}

/// Body-pose keypoint indices (33-point topology)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PoseKeypoint {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl PoseKeypoint {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Face-mesh keypoint indices used by the expression classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum FaceKeypoint {
    NoseTip = 1,
    UpperLipCenter = 13,
    LowerLipCenter = 14,
    LeftMouthCorner = 61,
    LeftEyebrow = 70,
    Chin = 152,
    RightMouthCorner = 291,
    RightEyebrow = 300,
}

impl FaceKeypoint {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A landmark frame known to hold a full body pose.
///
/// Construction validates the length once so keypoint lookups never go
/// out of bounds. Deserialization goes through the same check, so a
/// `PoseFrame` reads and writes as a plain landmark array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LandmarkFrame", into = "LandmarkFrame")]
pub struct PoseFrame {
    landmarks: Vec<Landmark>,
}

impl PoseFrame {
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        if landmarks.len() < POSE_LANDMARK_COUNT {
            return Err(Error::InsufficientLandmarks {
                required: POSE_LANDMARK_COUNT,
                available: landmarks.len(),
            });
        }
        Ok(Self { landmarks })
    }

    pub fn get(&self, keypoint: PoseKeypoint) -> &Landmark {
        &self.landmarks[keypoint.index()]
    }

    /// Replace a single keypoint
    pub fn set(&mut self, keypoint: PoseKeypoint, landmark: Landmark) {
        self.landmarks[keypoint.index()] = landmark;
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl TryFrom<LandmarkFrame> for PoseFrame {
    type Error = Error;

    fn try_from(frame: LandmarkFrame) -> Result<Self> {
        Self::new(frame.0)
    }
}

impl From<PoseFrame> for LandmarkFrame {
    fn from(frame: PoseFrame) -> Self {
        LandmarkFrame(frame.landmarks)
    }
}

/// Borrowed view over a landmark frame known to hold a full face mesh
#[derive(Debug, Clone, Copy)]
pub struct FaceMesh<'a> {
    landmarks: &'a [Landmark],
}

impl<'a> FaceMesh<'a> {
    pub fn new(frame: &'a LandmarkFrame) -> Result<Self> {
        if frame.len() < FACE_LANDMARK_COUNT {
            return Err(Error::InsufficientLandmarks {
                required: FACE_LANDMARK_COUNT,
                available: frame.len(),
            });
        }
        Ok(Self {
            landmarks: frame.landmarks(),
        })
    }

    pub fn get(&self, keypoint: FaceKeypoint) -> &'a Landmark {
        &self.landmarks[keypoint.index()]
    }
}

/// A named, scored facial-activation category reported by a face detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blendshape {
    pub category_name: String,
    pub score: f64,
}

impl Blendshape {
    pub fn new(category_name: impl Into<String>, score: f64) -> Self {
        Self {
            category_name: category_name.into(),
            score,
        }
    }
}

/// Score of the named category, 0 when absent
pub fn blendshape_score(blendshapes: &[Blendshape], category_name: &str) -> f64 {
    blendshapes
        .iter()
        .find(|b| b.category_name == category_name)
        .map(|b| b.score)
        .unwrap_or(0.0)
}
