//! Static mock response table.
//!
//! Simulates what a real model backend would return for each modality. Used
//! by the demo-mode walkthrough; none of the values are derived from any
//! input.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use super::{
    AnalysisError, AnalysisProvider, EmotionScores, FaceReport, FusionReport, ModalScore,
    TextMetric, TextReport, Verdict, VoiceFeatures, VoiceReport,
};

/// Serves the canned table below for every call.
pub struct MockProvider;

/// Shared instance for demo mode.
pub static MOCK_PROVIDER: MockProvider = MockProvider;

impl AnalysisProvider for MockProvider {
    fn voice(&self, _clip_url: &str) -> Result<VoiceReport, AnalysisError> {
        Ok(voice_sample())
    }

    fn face(&self, _frame_url: &str) -> Result<FaceReport, AnalysisError> {
        Ok(face_sample())
    }

    fn text(&self, _input: &str) -> Result<TextReport, AnalysisError> {
        Ok(text_sample())
    }

    fn fusion(&self) -> Result<FusionReport, AnalysisError> {
        Ok(fusion_sample())
    }
}

pub fn voice_sample() -> VoiceReport {
    VoiceReport {
        verdict: Verdict::Truth,
        confidence: 0.87,
        features: VoiceFeatures {
            pitch_mean_hz: 180.5,
            pitch_variance: 25.3,
            mfcc: vec![12.5, -8.2, 4.1, -2.8, 1.9],
            jitter: 0.012,
            shimmer: 0.045,
            spectral_centroid_hz: 2500.8,
        },
    }
}

pub fn face_sample() -> FaceReport {
    FaceReport {
        verdict: Verdict::Lie,
        confidence: 0.73,
        emotions: EmotionScores {
            neutral: 0.45,
            happy: 0.12,
            sad: 0.08,
            angry: 0.15,
            fear: 0.10,
            disgust: 0.05,
            surprise: 0.05,
        },
        micro_expressions: vec![
            "eye_movement".to_owned(),
            "lip_compression".to_owned(),
            "brow_furrow".to_owned(),
        ],
    }
}

pub fn text_sample() -> TextReport {
    TextReport {
        verdict: Verdict::Truth,
        confidence: 0.87,
        metrics: vec![
            metric("Linguistic Complexity", 78),
            metric("Emotional Indicators", 65),
            metric("Consistency Score", 92),
            metric("Semantic Coherence", 84),
            metric("Stress Markers", 23),
        ],
        indicators: vec![
            "High semantic consistency throughout the text".to_owned(),
            "Natural language flow with minimal hesitation markers".to_owned(),
            "Consistent emotional tone and vocabulary usage".to_owned(),
            "No significant contradictory statements detected".to_owned(),
            "Appropriate level of detail for the context".to_owned(),
        ],
    }
}

pub fn fusion_sample() -> FusionReport {
    FusionReport {
        verdict: Verdict::Truth,
        confidence: 0.84,
        voice: ModalScore { verdict: Verdict::Truth, confidence: 0.87 },
        face: ModalScore { verdict: Verdict::Lie, confidence: 0.73 },
        text: ModalScore { verdict: Verdict::Truth, confidence: 0.87 },
        weighted_score: 0.84,
    }
}

fn metric(name: &str, value: u8) -> TextMetric {
    TextMetric { name: name.to_owned(), value }
}
