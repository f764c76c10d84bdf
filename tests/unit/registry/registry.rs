use super::*;
use crate::foundation::core::{Canvas, Fps};

#[test]
fn lists_every_video_in_story_format() {
    let metas = list().unwrap();
    let ids: Vec<&str> = metas.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "ratio-launch",
            "moot-court-session",
            "feedback-breakdown",
            "careers-portal"
        ]
    );
    for m in &metas {
        assert_eq!(m.canvas, Canvas::STORY);
        assert_eq!(m.fps, Fps::integer(30));
        assert!(m.duration_in_frames > 0);
    }
}

#[test]
fn lookup_builds_the_matching_composition() {
    for id in ids() {
        assert_eq!(lookup(id).unwrap().meta.id, id);
    }
    assert!(lookup("ratio-launch").unwrap().meta.duration_in_frames >= 1481);
}

#[test]
fn unknown_id_is_a_validation_error_naming_it() {
    let err = lookup("legal-pages").unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));
    assert!(err.to_string().contains("legal-pages"));
}
