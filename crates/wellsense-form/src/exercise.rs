//! Exercise variants and the per-frame feedback they produce.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use wellsense_core::Error;

/// Starting score before any rule deductions
pub const MAX_SCORE: u32 = 100;

/// Scores at or above this count as good form
pub const GOOD_FORM_THRESHOLD: u32 = 70;

/// Correction reported when a host asks for an exercise we do not model
pub const UNKNOWN_EXERCISE_CORRECTION: &str = "unknown exercise type";

/// Closed set of exercises the form analyzer can score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseType {
    PushUp,
    SitUp,
    Squat,
    Plank,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 4] = [
        ExerciseType::PushUp,
        ExerciseType::SitUp,
        ExerciseType::Squat,
        ExerciseType::Plank,
    ];

    /// Whether repetitions are counted automatically for this exercise.
    ///
    /// Sit-ups and planks are left to manual counting.
    pub fn counts_reps(&self) -> bool {
        matches!(self, ExerciseType::PushUp | ExerciseType::Squat)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExerciseType::PushUp => "push-up",
            ExerciseType::SitUp => "sit-up",
            ExerciseType::Squat => "squat",
            ExerciseType::Plank => "plank",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExerciseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pushup" | "push-up" | "push up" => Ok(ExerciseType::PushUp),
            "situp" | "sit-up" | "sit up" => Ok(ExerciseType::SitUp),
            "squat" => Ok(ExerciseType::Squat),
            "plank" => Ok(ExerciseType::Plank),
            _ => Err(Error::UnknownExercise(s.to_string())),
        }
    }
}

/// Form quality for one frame of one exercise.
///
/// `is_good_form` equals `score >= GOOD_FORM_THRESHOLD` for every value built
/// by [`FormFeedback::from_deductions`] or [`FormFeedback::unknown_exercise`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFeedback {
    pub score: u32,
    pub corrections: Vec<String>,
    pub is_good_form: bool,
}

impl FormFeedback {
    /// Build feedback from the total penalty of all violated rules, floored at 0
    pub fn from_deductions(total_penalty: u32, corrections: Vec<String>) -> Self {
        let score = MAX_SCORE.saturating_sub(total_penalty);
        Self {
            score,
            corrections,
            is_good_form: score >= GOOD_FORM_THRESHOLD,
        }
    }

    /// Explicit failure value for an unrecognized exercise
    pub fn unknown_exercise() -> Self {
        Self {
            score: 0,
            corrections: vec![UNKNOWN_EXERCISE_CORRECTION.to_string()],
            is_good_form: false,
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.score == MAX_SCORE && self.corrections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        for name in ["pushup", "Push-Up", " push up "] {
            assert_eq!(name.parse::<ExerciseType>().unwrap(), ExerciseType::PushUp);
        }
        for name in ["situp", "SIT-UP", "sit up"] {
            assert_eq!(name.parse::<ExerciseType>().unwrap(), ExerciseType::SitUp);
        }
        assert_eq!("Squat".parse::<ExerciseType>().unwrap(), ExerciseType::Squat);
        assert_eq!("plank".parse::<ExerciseType>().unwrap(), ExerciseType::Plank);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "burpee".parse::<ExerciseType>().unwrap_err();
        assert!(matches!(err, Error::UnknownExercise(ref name) if name == "burpee"));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for exercise in ExerciseType::ALL {
            assert_eq!(exercise.to_string().parse::<ExerciseType>().unwrap(), exercise);
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ExerciseType::PushUp).unwrap();
        assert_eq!(json, "\"push-up\"");
    }

    #[test]
    fn test_only_push_up_and_squat_count_reps() {
        assert!(ExerciseType::PushUp.counts_reps());
        assert!(ExerciseType::Squat.counts_reps());
        assert!(!ExerciseType::SitUp.counts_reps());
        assert!(!ExerciseType::Plank.counts_reps());
    }

    #[test]
    fn test_good_form_boundary() {
        assert!(FormFeedback::from_deductions(30, vec![]).is_good_form);
        assert!(!FormFeedback::from_deductions(35, vec![]).is_good_form);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let feedback = FormFeedback::from_deductions(140, vec!["a".into()]);
        assert_eq!(feedback.score, 0);
        assert!(!feedback.is_good_form);
    }

    #[test]
    fn test_unknown_exercise_sentinel() {
        let feedback = FormFeedback::unknown_exercise();
        assert_eq!(feedback.score, 0);
        assert_eq!(feedback.corrections, vec!["unknown exercise type".to_string()]);
        assert!(!feedback.is_good_form);
    }
}
