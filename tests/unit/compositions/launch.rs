use super::*;
use crate::foundation::core::FrameIndex;

#[test]
fn builds_clean_in_story_format() {
    let comp = build().unwrap();
    assert_eq!(comp.meta.id, ID);
    assert_eq!(comp.meta.canvas, Canvas::STORY);
    assert_eq!(comp.meta.duration_in_frames, DURATION);
    assert!(comp.check().warnings.is_empty(), "{:?}", comp.check().warnings);
}

#[test]
fn tagline_caption_highlights_up_to_the_fourth_word() {
    let comp = build().unwrap();
    let cap = comp.render(FrameIndex(1395)).caption.unwrap();
    assert_eq!(cap.text, "RATIO. See how far you can go.");
    assert_eq!(cap.word_index, 3);
    let lit: Vec<&str> = cap
        .words
        .iter()
        .filter(|w| w.highlighted)
        .map(|w| w.text.as_str())
        .collect();
    assert_eq!(lit, ["RATIO.", "See", "how", "far"]);
}

#[test]
fn brand_scene_owns_the_ending() {
    let comp = build().unwrap();
    let out = comp.render(FrameIndex(1450));
    let ids: Vec<&str> = out.scenes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["brand"]);
    assert!(out.nodes.iter().any(|n| n.find("underlays").is_some()));
}

#[test]
fn audio_manifest_covers_every_cue() {
    let comp = build().unwrap();
    let m = comp.audio_manifest().unwrap();
    assert_eq!(m.segments.len(), comp.audio.len());
}
