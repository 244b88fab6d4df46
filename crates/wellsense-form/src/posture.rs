//! Seated desk-posture assessment from a front-facing pose frame.

use serde::{Deserialize, Serialize};
use std::fmt;

use wellsense_core::{midpoint, PoseFrame, PoseKeypoint::*};

/// Vertical shoulder-to-hip span under which the user is considered slouched
pub const MIN_TORSO_HEIGHT: f64 = 0.3;

const LEVEL_TOLERANCE: f64 = 0.05;
const HEAD_OFFSET_TOLERANCE: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureStatus {
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl PostureStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => PostureStatus::Good,
            60..=79 => PostureStatus::Fair,
            40..=59 => PostureStatus::Poor,
            _ => PostureStatus::VeryPoor,
        }
    }
}

impl fmt::Display for PostureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PostureStatus::Good => "Good",
            PostureStatus::Fair => "Fair",
            PostureStatus::Poor => "Poor",
            PostureStatus::VeryPoor => "Very Poor",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureAssessment {
    pub score: u32,
    pub issues: Vec<String>,
    pub status: PostureStatus,
    /// Vertical shoulder-mid to hip-mid distance
    pub torso_height: f64,
}

impl PostureAssessment {
    pub fn is_upright(&self) -> bool {
        self.torso_height > MIN_TORSO_HEIGHT
    }

    /// Short label recorded into the session history
    pub fn history_label(&self) -> &'static str {
        if self.is_upright() {
            "Good posture"
        } else {
            "Slouching - sit upright"
        }
    }
}

/// Score a seated pose starting from 100 and deducting per detected issue
pub fn assess_posture(frame: &PoseFrame) -> PostureAssessment {
    let (ls, rs) = (frame.get(LeftShoulder), frame.get(RightShoulder));
    let (lh, rh) = (frame.get(LeftHip), frame.get(RightHip));
    let nose = frame.get(Nose);
    let shoulders = midpoint(ls, rs);
    let hips = midpoint(lh, rh);
    let torso_height = (shoulders.y - hips.y).abs();

    let checks = [
        ((ls.y - rs.y).abs() > LEVEL_TOLERANCE, "uneven shoulders", 20),
        ((nose.x - shoulders.x).abs() > HEAD_OFFSET_TOLERANCE, "forward head posture", 25),
        (torso_height < MIN_TORSO_HEIGHT, "slouching", 20),
        ((lh.y - rh.y).abs() > LEVEL_TOLERANCE, "uneven hips", 15),
    ];

    let mut score: u32 = 100;
    let mut issues = Vec::new();
    for (failed, issue, penalty) in checks {
        if failed {
            score = score.saturating_sub(penalty);
            issues.push(issue.to_string());
        }
    }

    PostureAssessment {
        score,
        issues,
        status: PostureStatus::from_score(score),
        torso_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use wellsense_core::Landmark;

    #[test]
    fn test_upright_seated_pose() {
        let assessment = assess_posture(&fixtures::seated());
        assert_eq!(assessment.score, 100);
        assert!(assessment.issues.is_empty());
        assert_eq!(assessment.status, PostureStatus::Good);
        assert_eq!(assessment.history_label(), "Good posture");
    }

    #[test]
    fn test_forward_head() {
        let mut frame = fixtures::seated();
        frame.set(Nose, Landmark::xy(0.62, 0.25));
        let assessment = assess_posture(&frame);
        assert_eq!(assessment.score, 75);
        assert_eq!(assessment.issues, vec!["forward head posture".to_string()]);
        assert_eq!(assessment.status, PostureStatus::Fair);
    }

    #[test]
    fn test_slouch_changes_history_label() {
        let mut frame = fixtures::seated();
        frame.set(LeftShoulder, Landmark::xy(0.40, 0.55));
        frame.set(RightShoulder, Landmark::xy(0.60, 0.55));
        let assessment = assess_posture(&frame);
        assert_eq!(assessment.issues, vec!["slouching".to_string()]);
        assert_eq!(assessment.score, 80);
        assert!(!assessment.is_upright());
        assert_eq!(assessment.history_label(), "Slouching - sit upright");
    }

    #[test]
    fn test_everything_wrong() {
        let mut frame = fixtures::seated();
        frame.set(LeftShoulder, Landmark::xy(0.40, 0.50));
        frame.set(RightShoulder, Landmark::xy(0.60, 0.60));
        frame.set(Nose, Landmark::xy(0.70, 0.30));
        frame.set(LeftHip, Landmark::xy(0.42, 0.70));
        frame.set(RightHip, Landmark::xy(0.58, 0.80));
        let assessment = assess_posture(&frame);
        assert_eq!(
            assessment.issues,
            vec!["uneven shoulders", "forward head posture", "slouching", "uneven hips"]
        );
        assert_eq!(assessment.score, 20);
        assert_eq!(assessment.status, PostureStatus::VeryPoor);
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(PostureStatus::from_score(80), PostureStatus::Good);
        assert_eq!(PostureStatus::from_score(79), PostureStatus::Fair);
        assert_eq!(PostureStatus::from_score(60), PostureStatus::Fair);
        assert_eq!(PostureStatus::from_score(40), PostureStatus::Poor);
        assert_eq!(PostureStatus::from_score(39), PostureStatus::VeryPoor);
        assert_eq!(PostureStatus::VeryPoor.to_string(), "Very Poor");
    }
}
