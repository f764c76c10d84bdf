use super::*;
use crate::primitives::{overlay::Vignette, particles::ParticleField};
use serde_json::json;

fn sample() -> Composition {
    Composition {
        meta: CompositionMeta::story("sample", 240),
        background: Rgba8::rgb(5, 7, 12),
        underlays: vec![Layer::Particles(ParticleField::new(
            8,
            Canvas::STORY.rect(),
            Rgba8::WHITE,
        ))],
        scenes: vec![
            SceneDef {
                scene: Scene::new("one", 0, 120, 20),
                z: 0,
                layers: vec![],
            },
            SceneDef {
                scene: Scene::new("two", 100, 140, 0),
                z: 1,
                layers: vec![],
            },
        ],
        overlays: vec![Layer::Vignette(Vignette::new(0.5))],
        captions: vec![CaptionPhrase::new("Practice like it is real.", 30, 90)],
        audio: vec![AudioCue::new("audio/music/bed.mp3", 0, 240).fades(0, 30)],
    }
}

#[test]
fn meta_helpers() {
    let m = CompositionMeta::story("x", 450);
    assert_eq!(m.duration_secs(), 15.0);
    assert_eq!(m.frame_range().len_frames(), 450);
}

#[test]
fn json_round_trip_is_lossless() {
    let comp = sample();
    let s = comp.to_json_pretty().unwrap();
    let back = Composition::from_reader(s.as_bytes()).unwrap();
    assert_eq!(back, comp);
    assert_eq!(back.render(FrameIndex(110)), comp.render(FrameIndex(110)));
}

#[test]
fn scene_fields_are_flattened_in_json() {
    let v = serde_json::to_value(sample()).unwrap();
    assert_eq!(v["scenes"][1]["id"], "two");
    assert_eq!(v["scenes"][1]["start"], 100);
    assert_eq!(v["scenes"][1]["z"], 1);
}

#[test]
fn minimal_json_uses_defaults() {
    let comp: Composition = serde_json::from_value(json!({
        "meta": {
            "id": "tiny",
            "fps": {"num": 30, "den": 1},
            "duration_in_frames": 10,
            "canvas": {"width": 393, "height": 852}
        }
    }))
    .unwrap();
    assert_eq!(comp.background, Rgba8::BLACK);
    assert!(comp.scenes.is_empty());
    assert!(comp.validate().is_ok());
    assert!(comp.render(FrameIndex(3)).nodes.is_empty());
}

#[test]
fn bad_json_and_missing_files_are_errors() {
    let err = Composition::from_reader("{".as_bytes()).unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)));
    let err = Composition::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open composition JSON"));
}

#[test]
fn write_path_round_trips() {
    let dir = std::env::temp_dir().join(format!("ratio-motion-model-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sample.json");
    sample().write_path(&path).unwrap();
    assert_eq!(Composition::from_path(&path).unwrap(), sample());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn scene_lookup_and_audio_manifest() {
    let comp = sample();
    assert_eq!(comp.scene("two").map(|s| s.z), Some(1));
    assert!(comp.scene("three").is_none());
    let m = comp.audio_manifest().unwrap();
    assert_eq!(m.segments.len(), 1);
    assert_eq!(m.segments[0].end_sample, m.total_samples);
}
