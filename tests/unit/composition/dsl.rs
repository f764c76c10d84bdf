use super::*;
use crate::{
    foundation::core::{FrameIndex, Point},
    primitives::text::TextReveal,
};

fn title() -> Layer {
    Layer::Text(TextReveal::new(
        "Moot Court",
        Point::new(196.0, 400.0),
        40.0,
        Rgba8::WHITE,
        0.0,
    ))
}

#[test]
fn builder_produces_story_format() {
    let comp = CompositionBuilder::story("demo", 300)
        .background(Rgba8::rgb(8, 10, 18))
        .scene(
            SceneBuilder::new("intro", 0, 120)
                .crossfade(15)
                .layer(title())
                .build()
                .unwrap(),
        )
        .caption("Step into the courtroom.", 20, 100)
        .audio(AudioCue::new("audio/music/bed.mp3", 0, 300))
        .build()
        .unwrap();

    assert_eq!(comp.meta.canvas, Canvas::STORY);
    assert_eq!(comp.meta.fps, Fps::integer(30));
    assert_eq!(comp.scenes.len(), 1);
    assert_eq!(comp.scenes[0].scene.crossfade, 15);
    assert_eq!(comp.captions.len(), 1);
    assert!(comp.render(FrameIndex(50)).caption.is_some());
}

#[test]
fn scene_builder_rejects_malformed_windows() {
    assert!(SceneBuilder::new("", 0, 10).build().is_err());
    assert!(SceneBuilder::new("a", 0, 0).build().is_err());
    assert!(SceneBuilder::new("a", 0, 10).crossfade(11).build().is_err());
    assert!(SceneBuilder::new("a", 0, 10).crossfade(-1).build().is_err());
    assert!(SceneBuilder::new("a", -5, 10).crossfade(10).build().is_ok());
}

#[test]
fn composition_builder_rejects_duplicate_scene_ids() {
    let s = || SceneBuilder::new("same", 0, 30).layer(title()).build().unwrap();
    let err = CompositionBuilder::story("dup", 60)
        .scene(s())
        .scene(s())
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("duplicate scene id 'same'"));

    assert!(
        CompositionBuilder::new("zero", Fps::integer(30), Canvas::STORY, 0)
            .build()
            .is_err()
    );
}
