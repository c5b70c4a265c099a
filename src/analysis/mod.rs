//! Analysis provider seam and structured result types.
//!
//! SYSTEM CONTEXT
//! ==============
//! No real model exists in this product yet. Pages call a modality method on
//! an injected [`AnalysisProvider`] and either render the structured report
//! or surface the typed failure. A real backend slots in behind the trait
//! without touching view code.

pub mod mock;
pub mod pending;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One detection channel the product anticipates wiring to a real model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Voice,
    Face,
    Text,
    Fusion,
}

impl Modality {
    pub fn label(self) -> &'static str {
        match self {
            Self::Voice => "voice",
            Self::Face => "face",
            Self::Text => "text",
            Self::Fusion => "fusion",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict label shared by analysis results and report records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[default]
    Truth,
    Lie,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Self::Truth => "Truth",
            Self::Lie => "Lie",
        }
    }
}

/// Typed failure for analysis calls.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The placeholder state of the whole product: no model backend is wired
    /// up, so every analysis request fails with this variant.
    #[error("{0} analysis is not connected to a model backend yet")]
    NotConnected(Modality),
}

/// Vocal feature block of a voice report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceFeatures {
    pub pitch_mean_hz: f32,
    pub pitch_variance: f32,
    pub mfcc: Vec<f32>,
    pub jitter: f32,
    pub shimmer: f32,
    pub spectral_centroid_hz: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceReport {
    pub verdict: Verdict,
    /// Model confidence in `[0, 1]`.
    pub confidence: f32,
    pub features: VoiceFeatures,
}

/// Per-emotion probability scores, each in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub neutral: f32,
    pub happy: f32,
    pub sad: f32,
    pub angry: f32,
    pub fear: f32,
    pub disgust: f32,
    pub surprise: f32,
}

impl EmotionScores {
    /// Label/score pairs in display order.
    pub fn entries(&self) -> [(&'static str, f32); 7] {
        [
            ("Neutral", self.neutral),
            ("Happy", self.happy),
            ("Sad", self.sad),
            ("Angry", self.angry),
            ("Fear", self.fear),
            ("Disgust", self.disgust),
            ("Surprise", self.surprise),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceReport {
    pub verdict: Verdict,
    pub confidence: f32,
    pub emotions: EmotionScores,
    pub micro_expressions: Vec<String>,
}

/// A named 0–100 metric on the text report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetric {
    pub name: String,
    pub value: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextReport {
    pub verdict: Verdict,
    pub confidence: f32,
    pub metrics: Vec<TextMetric>,
    pub indicators: Vec<String>,
}

/// Verdict + confidence pair for one modality inside a fusion report.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModalScore {
    pub verdict: Verdict,
    pub confidence: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FusionReport {
    pub verdict: Verdict,
    pub confidence: f32,
    pub voice: ModalScore,
    pub face: ModalScore,
    pub text: ModalScore,
    pub weighted_score: f32,
}

/// One method per modality. Media inputs arrive as object-URL handles since
/// nothing downstream of this interface consumes bytes yet.
pub trait AnalysisProvider: Sync {
    fn voice(&self, clip_url: &str) -> Result<VoiceReport, AnalysisError>;
    fn face(&self, frame_url: &str) -> Result<FaceReport, AnalysisError>;
    fn text(&self, input: &str) -> Result<TextReport, AnalysisError>;
    fn fusion(&self) -> Result<FusionReport, AnalysisError>;
}

/// Context handle wrapping the provider chosen at the app root.
#[derive(Clone, Copy)]
pub struct ProviderHandle(pub &'static dyn AnalysisProvider);
