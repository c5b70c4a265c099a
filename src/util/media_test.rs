use super::*;

#[test]
fn audio_mime_acceptance() {
    assert!(is_audio_mime("audio/wav"));
    assert!(is_audio_mime("audio/webm"));
    assert!(!is_audio_mime("video/mp4"));
    assert!(!is_audio_mime(""));
}

#[test]
fn video_mime_acceptance() {
    assert!(is_video_mime("video/mp4"));
    assert!(is_video_mime("video/webm"));
    assert!(!is_video_mime("audio/wav"));
    assert!(!is_video_mime("image/jpeg"));
}
