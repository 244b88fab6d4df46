//! Form scoring entry points and the per-session exercise tracker.

use serde::{Deserialize, Serialize};

use wellsense_core::PoseFrame;

use crate::exercise::{ExerciseType, FormFeedback};
use crate::reps::{rep_signal, RepCounter};
use crate::rules::{FormRule, PLANK_RULES, PUSH_UP_RULES, SIT_UP_RULES, SQUAT_RULES};

/// Anything that can turn a pose frame into form feedback from a rule table.
///
/// Implementors only supply the table; deduction, clamping and the
/// good-form threshold are shared.
pub trait FormScorer {
    fn rules(&self) -> &'static [FormRule];

    fn score(&self, frame: &PoseFrame) -> FormFeedback {
        let mut total_penalty = 0;
        let mut corrections = Vec::new();

        for rule in self.rules() {
            if let Some(violation) = rule.check(frame) {
                tracing::trace!(rule = rule.name, penalty = violation.penalty, "form rule violated");
                total_penalty += violation.penalty;
                corrections.push(violation.correction.to_string());
            }
        }

        FormFeedback::from_deductions(total_penalty, corrections)
    }
}

impl FormScorer for ExerciseType {
    fn rules(&self) -> &'static [FormRule] {
        match self {
            ExerciseType::PushUp => PUSH_UP_RULES,
            ExerciseType::SitUp => SIT_UP_RULES,
            ExerciseType::Squat => SQUAT_RULES,
            ExerciseType::Plank => PLANK_RULES,
        }
    }
}

/// Score one pose frame for one exercise
pub fn analyze_form(frame: &PoseFrame, exercise: ExerciseType) -> FormFeedback {
    exercise.score(frame)
}

/// Score one pose frame for an exercise named by the host.
///
/// Unrecognized names produce [`FormFeedback::unknown_exercise`] rather than
/// an error.
pub fn analyze_form_named(frame: &PoseFrame, exercise: &str) -> FormFeedback {
    match exercise.parse::<ExerciseType>() {
        Ok(exercise) => analyze_form(frame, exercise),
        Err(e) => {
            tracing::debug!("{}", e);
            FormFeedback::unknown_exercise()
        }
    }
}

/// Result of one exercise analysis cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseReport {
    pub exercise: ExerciseType,
    pub feedback: FormFeedback,
    pub rep_count: u32,
    pub rep_completed: bool,
}

/// Form scoring plus rep counting for one exercise over one session
#[derive(Debug, Clone)]
pub struct ExerciseTracker {
    exercise: ExerciseType,
    reps: RepCounter,
}

impl ExerciseTracker {
    pub fn new(exercise: ExerciseType) -> Self {
        Self {
            exercise,
            reps: RepCounter::new(),
        }
    }

    pub fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    pub fn reps(&self) -> &RepCounter {
        &self.reps
    }

    /// Score the frame and, for exercises that count reps, advance the counter
    pub fn process_frame(&mut self, frame: &PoseFrame) -> ExerciseReport {
        let feedback = analyze_form(frame, self.exercise);

        let rep_completed = self.exercise.counts_reps()
            && self.reps.observe(&feedback, rep_signal(frame));

        if rep_completed {
            tracing::debug!(exercise = %self.exercise, count = self.reps.count(), "rep completed");
        }

        ExerciseReport {
            exercise: self.exercise,
            feedback,
            rep_count: self.reps.count(),
            rep_completed,
        }
    }

    pub fn reset(&mut self) {
        self.reps.reset();
    }
}
