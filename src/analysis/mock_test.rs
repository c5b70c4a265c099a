use super::*;

fn in_unit_range(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

#[test]
fn provider_serves_every_modality() {
    assert!(MockProvider.voice("blob:clip").is_ok());
    assert!(MockProvider.face("blob:frame").is_ok());
    assert!(MockProvider.text("statement").is_ok());
    assert!(MockProvider.fusion().is_ok());
}

#[test]
fn confidences_stay_in_unit_range() {
    assert!(in_unit_range(voice_sample().confidence));
    assert!(in_unit_range(face_sample().confidence));
    assert!(in_unit_range(text_sample().confidence));
    let fusion = fusion_sample();
    assert!(in_unit_range(fusion.confidence));
    assert!(in_unit_range(fusion.weighted_score));
}

#[test]
fn face_emotion_scores_sum_to_one() {
    let e = face_sample().emotions;
    let sum = e.neutral + e.happy + e.sad + e.angry + e.fear + e.disgust + e.surprise;
    assert!((sum - 1.0).abs() < 1e-4);
}

#[test]
fn fusion_references_all_three_modalities() {
    let fusion = fusion_sample();
    assert!(in_unit_range(fusion.voice.confidence));
    assert!(in_unit_range(fusion.face.confidence));
    assert!(in_unit_range(fusion.text.confidence));
}

#[test]
fn text_metrics_are_percentages() {
    for m in text_sample().metrics {
        assert!(m.value <= 100, "{} out of range", m.name);
    }
}
