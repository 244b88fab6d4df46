//! Smile detection from mouth geometry.

use serde::{Deserialize, Serialize};

use wellsense_core::{distance, midpoint, FaceKeypoint::*, FaceMesh, LandmarkFrame};

/// Mouth width over mouth opening above which a mouth reads as stretched
pub const SMILE_WIDTH_RATIO: f64 = 3.5;

/// Required lift of the mouth corners relative to the nose tip
pub const SMILE_CORNER_ELEVATION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmileMetrics {
    pub width_to_height: f64,
    pub corner_elevation: f64,
}

impl SmileMetrics {
    pub fn measure(mesh: &FaceMesh<'_>) -> Self {
        let (left, right) = (mesh.get(LeftMouthCorner), mesh.get(RightMouthCorner));
        let width = distance(left, right);
        let height = distance(mesh.get(UpperLipCenter), mesh.get(LowerLipCenter));

        Self {
            width_to_height: width / height,
            corner_elevation: mesh.get(NoseTip).y - midpoint(left, right).y,
        }
    }

    pub fn is_smiling(&self) -> bool {
        self.width_to_height > SMILE_WIDTH_RATIO && self.corner_elevation > SMILE_CORNER_ELEVATION
    }
}

/// Whether the face in `frame` is smiling; partial meshes never are
pub fn detect_smile(frame: &LandmarkFrame) -> bool {
    FaceMesh::new(frame)
        .map(|mesh| SmileMetrics::measure(&mesh).is_smiling())
        .unwrap_or(false)
}
