//! Default provider while no model backend exists.

#[cfg(test)]
#[path = "pending_test.rs"]
mod pending_test;

use super::{
    AnalysisError, AnalysisProvider, FaceReport, FusionReport, Modality, TextReport, VoiceReport,
};

/// Fails every call with [`AnalysisError::NotConnected`]. Pages turn that
/// into the blocking "integration pending" notice.
pub struct PendingProvider;

/// Shared instance for context injection.
pub static PENDING_PROVIDER: PendingProvider = PendingProvider;

impl AnalysisProvider for PendingProvider {
    fn voice(&self, _clip_url: &str) -> Result<VoiceReport, AnalysisError> {
        Err(AnalysisError::NotConnected(Modality::Voice))
    }

    fn face(&self, _frame_url: &str) -> Result<FaceReport, AnalysisError> {
        Err(AnalysisError::NotConnected(Modality::Face))
    }

    fn text(&self, _input: &str) -> Result<TextReport, AnalysisError> {
        Err(AnalysisError::NotConnected(Modality::Text))
    }

    fn fusion(&self) -> Result<FusionReport, AnalysisError> {
        Err(AnalysisError::NotConnected(Modality::Fusion))
    }
}
