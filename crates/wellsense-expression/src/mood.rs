//! Mood classification and the stateful expression classifier.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use wellsense_core::{
    blendshape_score, midpoint, Blendshape, FaceKeypoint::*, FaceMesh, LandmarkFrame,
};

use crate::blendshapes::ExpressionProfile;
use crate::encouragement::pick_encouragement;
use crate::smile::SmileMetrics;

/// Confidence reported for a full face mesh
pub const FULL_MESH_CONFIDENCE: f64 = 0.85;

/// Confidence reported while the mesh is incomplete
pub const PARTIAL_MESH_CONFIDENCE: f64 = 0.5;

/// Blendshape activation above which a smile or frown decides the mood
pub const BLENDSHAPE_THRESHOLD: f64 = 0.3;

const STRESSED_BROW_RATIO: f64 = 0.3;
const SAD_BROW_RATIO: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodCategory {
    Happy,
    Neutral,
    Sad,
    Stressed,
    /// No full face mesh yet
    Analyzing,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::Happy,
        MoodCategory::Neutral,
        MoodCategory::Sad,
        MoodCategory::Stressed,
        MoodCategory::Analyzing,
    ];

    /// Human-readable label, also used for history entries
    pub fn label(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "Happy",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Sad => "Sad",
            MoodCategory::Stressed => "Stressed",
            MoodCategory::Analyzing => "Analyzing...",
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    pub mood: MoodCategory,
    pub confidence: f64,
    pub is_smiling: bool,
    pub encouragement: String,
    /// Blendshape expression buckets, present when the detector sent any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expressions: Option<ExpressionProfile>,
}

/// Classify the mood of one face frame.
///
/// Non-empty blendshapes are consulted first: a strong smile means happy and
/// a strong frown means sad. Otherwise the landmarks decide, using the smile
/// test and then how far the eyebrows sit above the nose relative to face
/// height.
pub fn classify_mood(frame: &LandmarkFrame, blendshapes: Option<&[Blendshape]>) -> MoodCategory {
    let Ok(mesh) = FaceMesh::new(frame) else {
        return MoodCategory::Analyzing;
    };

    if let Some(shapes) = blendshapes.filter(|shapes| !shapes.is_empty()) {
        if blendshape_score(shapes, "mouthSmile") > BLENDSHAPE_THRESHOLD {
            return MoodCategory::Happy;
        }
        if blendshape_score(shapes, "mouthFrown") > BLENDSHAPE_THRESHOLD {
            return MoodCategory::Sad;
        }
    }

    if SmileMetrics::measure(&mesh).is_smiling() {
        return MoodCategory::Happy;
    }

    let nose = mesh.get(NoseTip);
    let brows = midpoint(mesh.get(LeftEyebrow), mesh.get(RightEyebrow));
    let face_height = (nose.y - mesh.get(Chin).y).abs();
    let brow_ratio = (nose.y - brows.y) / face_height;

    if brow_ratio < STRESSED_BROW_RATIO {
        MoodCategory::Stressed
    } else if brow_ratio < SAD_BROW_RATIO {
        MoodCategory::Sad
    } else {
        MoodCategory::Neutral
    }
}

/// Mood classifier that owns the randomness used to pick encouragement.
///
/// Mood, smile and confidence depend only on the input; the message is drawn
/// from `R`, so a seeded RNG makes the whole result reproducible.
#[derive(Debug, Clone)]
pub struct ExpressionClassifier<R = StdRng> {
    rng: R,
}

impl ExpressionClassifier<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ExpressionClassifier<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ExpressionClassifier<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn analyze_mood(
        &mut self,
        frame: &LandmarkFrame,
        blendshapes: Option<&[Blendshape]>,
    ) -> MoodResult {
        let (mood, confidence, is_smiling) = match FaceMesh::new(frame) {
            Ok(mesh) => (
                classify_mood(frame, blendshapes),
                FULL_MESH_CONFIDENCE,
                SmileMetrics::measure(&mesh).is_smiling(),
            ),
            Err(e) => {
                tracing::debug!("{}", e);
                (MoodCategory::Analyzing, PARTIAL_MESH_CONFIDENCE, false)
            }
        };

        tracing::debug!(%mood, is_smiling, "mood classified");

        MoodResult {
            mood,
            confidence,
            is_smiling,
            encouragement: pick_encouragement(mood, &mut self.rng).to_string(),
            expressions: blendshapes
                .filter(|shapes| !shapes.is_empty())
                .map(ExpressionProfile::from_blendshapes),
        }
    }
}
