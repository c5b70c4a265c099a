use super::*;

#[test]
fn every_modality_reports_not_connected() {
    assert_eq!(
        PendingProvider.voice("blob:abc"),
        Err(AnalysisError::NotConnected(Modality::Voice))
    );
    assert_eq!(
        PendingProvider.face("blob:abc"),
        Err(AnalysisError::NotConnected(Modality::Face))
    );
    assert_eq!(
        PendingProvider.text("some statement"),
        Err(AnalysisError::NotConnected(Modality::Text))
    );
    assert_eq!(
        PendingProvider.fusion(),
        Err(AnalysisError::NotConnected(Modality::Fusion))
    );
}

#[test]
fn not_connected_message_names_the_modality() {
    let err = AnalysisError::NotConnected(Modality::Voice);
    assert_eq!(
        err.to_string(),
        "voice analysis is not connected to a model backend yet"
    );
}
