//! Seam to the external landmark detector.
//!
//! The engine never runs a model itself. A host wraps its pose or face
//! detector in a [`LandmarkProvider`] and the session pulls one batch of
//! detections per frame.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use wellsense_core::{Blendshape, Error, LandmarkFrame, Result, Timestamp};

/// Which landmark topology the session currently needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandmarkTarget {
    /// 33-point body pose
    Pose,
    /// 468-point face mesh
    Face,
}

/// One detected subject in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub landmarks: LandmarkFrame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blendshapes: Option<Vec<Blendshape>>,
}

impl Detection {
    pub fn new(landmarks: LandmarkFrame) -> Self {
        Self {
            landmarks,
            blendshapes: None,
        }
    }

    pub fn with_blendshapes(mut self, blendshapes: Vec<Blendshape>) -> Self {
        self.blendshapes = Some(blendshapes);
        self
    }
}

/// External pose/face landmark detector
#[async_trait]
pub trait LandmarkProvider: Send {
    /// Frame type the detector consumes (video frame, image buffer, ...)
    type Image: Send + Sync;

    /// Load the detector. `Ok(false)` means it loaded but cannot run.
    async fn initialize(&mut self) -> Result<bool>;

    /// Detect subjects in `image`; empty when nobody is in view
    async fn detect(&mut self, image: &Self::Image, timestamp: Timestamp) -> Vec<Detection>;

    /// Switch between pose and face detection
    fn select_target(&mut self, _target: LandmarkTarget) {}
}

/// Sender half used to script a [`ScriptedProvider`]
pub type DetectionFeed = mpsc::UnboundedSender<Vec<Detection>>;

/// Provider that replays detection batches pushed through a [`DetectionFeed`].
///
/// Each `detect` call consumes one queued batch; an empty queue behaves like
/// a frame with nobody in view.
pub struct ScriptedProvider {
    rx: mpsc::UnboundedReceiver<Vec<Detection>>,
    init_error: Option<String>,
    target: Option<LandmarkTarget>,
    frames_seen: u64,
}

impl ScriptedProvider {
    pub fn new() -> (Self, DetectionFeed) {
        let (tx, rx) = mpsc::unbounded_channel();
        let provider = Self {
            rx,
            init_error: None,
            target: None,
            frames_seen: 0,
        };
        (provider, tx)
    }

    /// Provider whose initialization fails with `message`
    pub fn failing(message: &str) -> (Self, DetectionFeed) {
        let (mut provider, tx) = Self::new();
        provider.init_error = Some(message.to_string());
        (provider, tx)
    }

    pub fn target(&self) -> Option<LandmarkTarget> {
        self.target
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }
}

#[async_trait]
impl LandmarkProvider for ScriptedProvider {
    type Image = ();

    async fn initialize(&mut self) -> Result<bool> {
        match &self.init_error {
            Some(message) => Err(Error::Provider(message.clone())),
            None => Ok(true),
        }
    }

    async fn detect(&mut self, _image: &(), _timestamp: Timestamp) -> Vec<Detection> {
        self.frames_seen += 1;
        self.rx.try_recv().unwrap_or_default()
    }

    fn select_target(&mut self, target: LandmarkTarget) {
        self.target = Some(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellsense_core::Landmark;

    #[tokio::test]
    async fn test_scripted_replay() {
        let (mut provider, feed) = ScriptedProvider::new();
        assert!(provider.initialize().await.unwrap());

        let frame = LandmarkFrame::new(vec![Landmark::xy(0.1, 0.2); 3]);
        feed.send(vec![Detection::new(frame.clone())]).unwrap();

        let detections = provider.detect(&(), Timestamp::from_millis(0)).await;
        assert_eq!(detections, vec![Detection::new(frame)]);
        assert!(provider.detect(&(), Timestamp::from_millis(33)).await.is_empty());
        assert_eq!(provider.frames_seen(), 2);
    }

    #[tokio::test]
    async fn test_failing_initialization() {
        let (mut provider, _feed) = ScriptedProvider::failing("model missing");
        let err = provider.initialize().await.unwrap_err();
        assert!(matches!(err, Error::Provider(ref m) if m == "model missing"));
    }

    #[test]
    fn test_detection_json_omits_missing_blendshapes() {
        let detection = Detection::new(LandmarkFrame::new(vec![Landmark::xy(0.5, 0.5)]));
        let json = serde_json::to_string(&detection).unwrap();
        assert!(!json.contains("blendshapes"));

        let restored: Detection = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, detection);
    }
}
