//! Frame-driven analysis session.
//!
//! The host calls [`AnalysisSession::tick`] once per video frame. Each tick
//! asks the provider for detections and runs one classification cycle for
//! the active mode; nothing runs between ticks.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wellsense_core::{PoseFrame, Result, SessionId, Timestamp};
use wellsense_expression::{ExpressionClassifier, MoodResult};
use wellsense_form::{assess_posture, ExerciseReport, ExerciseTracker, ExerciseType, PostureAssessment};

use crate::config::SessionConfig;
use crate::history::{time_label, History, HistoryEntry, HistoryKind};
use crate::provider::{Detection, LandmarkProvider, LandmarkTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Face mesh, mood and smile
    Mood,
    /// Body pose, form score and reps
    Exercise(ExerciseType),
    /// Body pose, seated posture
    Posture,
}

impl AnalysisMode {
    pub fn target(&self) -> LandmarkTarget {
        match self {
            AnalysisMode::Mood => LandmarkTarget::Face,
            AnalysisMode::Exercise(_) | AnalysisMode::Posture => LandmarkTarget::Pose,
        }
    }
}

/// Result of one analysis cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CycleOutcome {
    Mood(MoodResult),
    Exercise(ExerciseReport),
    Posture(PostureAssessment),
}

/// Cloneable handle that stops a running session from elsewhere.
///
/// Stopping is cooperative: a tick already in progress completes, later
/// ticks are no-ops until the session is started again.
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

pub struct AnalysisSession<P: LandmarkProvider> {
    id: SessionId,
    provider: P,
    config: SessionConfig,
    ready: bool,
    running: Arc<AtomicBool>,
    mode: AnalysisMode,
    tracker: Option<ExerciseTracker>,
    history: History,
    classifier: ExpressionClassifier,
}

impl<P: LandmarkProvider> AnalysisSession<P> {
    pub fn new(provider: P) -> Self {
        Self::build(provider, SessionConfig::default())
    }

    pub fn with_config(provider: P, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(provider, config))
    }

    fn build(provider: P, config: SessionConfig) -> Self {
        let classifier = match config.encouragement_seed {
            Some(seed) => ExpressionClassifier::seeded(seed),
            None => ExpressionClassifier::new(),
        };

        Self {
            id: SessionId::new(),
            provider,
            history: History::with_capacity(config.history_capacity),
            mode: config.initial_mode,
            config,
            ready: false,
            running: Arc::new(AtomicBool::new(false)),
            tracker: None,
            classifier,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Repetitions counted since the current exercise started
    pub fn rep_count(&self) -> u32 {
        self.tracker.as_ref().map_or(0, |t| t.reps().count())
    }

    /// Load the detector; the session only starts once this reports ready
    pub async fn initialize(&mut self) -> Result<bool> {
        match self.provider.initialize().await {
            Ok(ready) => {
                self.ready = ready;
                if ready {
                    tracing::info!(session = %self.id, "landmark detector ready");
                } else {
                    tracing::warn!(session = %self.id, "landmark detector loaded but not usable");
                }
                Ok(ready)
            }
            Err(e) => {
                self.ready = false;
                tracing::warn!(session = %self.id, error = %e, "landmark detector failed to initialize");
                Err(e)
            }
        }
    }

    /// Begin analysis in `mode`, clearing reps and history.
    ///
    /// Returns `false` without changing anything if the detector is not ready.
    pub fn start(&mut self, mode: AnalysisMode) -> bool {
        if !self.ready {
            tracing::warn!(session = %self.id, ?mode, "start requested before detector is ready");
            return false;
        }

        self.mode = mode;
        self.reset();
        self.provider.select_target(mode.target());
        self.running.store(true, Ordering::SeqCst);

        tracing::info!(session = %self.id, ?mode, "analysis started");
        true
    }

    /// Start in the configured initial mode
    pub fn start_default(&mut self) -> bool {
        self.start(self.config.initial_mode)
    }

    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::info!(session = %self.id, mode = ?self.mode, "analysis stopped");
        }
    }

    /// Stop, reset and restart in `mode`
    pub fn switch_mode(&mut self, mode: AnalysisMode) -> bool {
        tracing::info!(session = %self.id, from = ?self.mode, to = ?mode, "switching mode");
        self.stop();
        self.start(mode)
    }

    fn reset(&mut self) {
        self.tracker = match self.mode {
            AnalysisMode::Exercise(exercise) => Some(ExerciseTracker::new(exercise)),
            AnalysisMode::Mood | AnalysisMode::Posture => None,
        };
        self.history.clear();
    }

    /// Run one analysis cycle on the first subject detected in `image`.
    ///
    /// `None` when the session is not running, nobody is in view, or the
    /// detection cannot be analyzed in the current mode.
    pub async fn tick(&mut self, image: &P::Image, timestamp: Timestamp) -> Option<CycleOutcome> {
        if !self.ready || !self.is_running() {
            return None;
        }

        let detection = self.provider.detect(image, timestamp).await.into_iter().next()?;

        match self.mode {
            AnalysisMode::Mood => Some(self.mood_cycle(detection, timestamp)),
            AnalysisMode::Exercise(_) => {
                let frame = self.pose_frame(detection)?;
                self.exercise_cycle(&frame).map(CycleOutcome::Exercise)
            }
            AnalysisMode::Posture => {
                let frame = self.pose_frame(detection)?;
                Some(self.posture_cycle(&frame, timestamp))
            }
        }
    }

    fn pose_frame(&self, detection: Detection) -> Option<PoseFrame> {
        match PoseFrame::try_from(detection.landmarks) {
            Ok(frame) => Some(frame),
            Err(e) => {
                tracing::warn!(session = %self.id, "skipping frame: {}", e);
                None
            }
        }
    }

    fn mood_cycle(&mut self, detection: Detection, timestamp: Timestamp) -> CycleOutcome {
        let result = self
            .classifier
            .analyze_mood(&detection.landmarks, detection.blendshapes.as_deref());

        tracing::debug!(session = %self.id, mood = %result.mood, confidence = result.confidence, "mood cycle");
        self.record_at(timestamp, result.mood.label(), HistoryKind::Mood);
        CycleOutcome::Mood(result)
    }

    fn exercise_cycle(&mut self, frame: &PoseFrame) -> Option<ExerciseReport> {
        let tracker = self.tracker.as_mut()?;
        let report = tracker.process_frame(frame);

        tracing::debug!(
            session = %self.id,
            exercise = %report.exercise,
            score = report.feedback.score,
            reps = report.rep_count,
            "exercise cycle"
        );
        Some(report)
    }

    fn posture_cycle(&mut self, frame: &PoseFrame, timestamp: Timestamp) -> CycleOutcome {
        let assessment = assess_posture(frame);

        tracing::debug!(session = %self.id, score = assessment.score, status = %assessment.status, "posture cycle");
        self.record_at(timestamp, assessment.history_label(), HistoryKind::Posture);
        CycleOutcome::Posture(assessment)
    }

    fn record_at(&mut self, timestamp: Timestamp, label: &str, kind: HistoryKind) {
        let time = time_label(timestamp, &self.config.time_label_format);
        self.history.record(HistoryEntry::new(time, label, kind));
    }

    /// Append an entry through the deduplicating aggregator
    pub fn record_history(&mut self, entry: HistoryEntry) -> bool {
        self.history.record(entry)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
