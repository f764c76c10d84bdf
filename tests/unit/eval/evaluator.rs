use super::*;
use crate::{
    caption::sync::CaptionPhrase,
    composition::model::{CompositionMeta, SceneDef},
    primitives::overlay::{Backdrop, Vignette},
    timeline::scene::Scene,
    visual::node::Paint,
};

fn def(id: &str, start: i64, duration: i64, z: i32) -> SceneDef {
    SceneDef {
        scene: Scene::new(id, start, duration, 10),
        z,
        layers: vec![Layer::Vignette(Vignette::new(0.4))],
    }
}

fn comp() -> Composition {
    Composition {
        meta: CompositionMeta::story("eval", 300),
        background: Rgba8::rgb(1, 2, 3),
        underlays: vec![Layer::Backdrop(Backdrop {
            paint: Paint::Solid(Rgba8::rgb(10, 10, 20)),
        })],
        scenes: vec![def("a", 0, 100, 1), def("b", 90, 100, 0), def("c", 90, 50, 1)],
        overlays: vec![Layer::Vignette(Vignette::new(0.6))],
        captions: vec![CaptionPhrase::new("Hello there", 95, 120)],
        audio: vec![],
    }
}

fn names(out: &FrameOutput) -> Vec<&str> {
    out.nodes.iter().filter_map(|n| n.name.as_deref()).collect()
}

#[test]
fn scenes_sort_by_z_then_declaration_order() {
    let out = Evaluator::render(&comp(), FrameIndex(100));
    assert_eq!(names(&out), ["underlays", "b", "a", "c", "overlays"]);
    let ids: Vec<&str> = out.scenes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
    assert_eq!(out.scenes[1].local_frame, 100);
    assert_eq!(out.scenes[1].opacity, 0.0);
}

#[test]
fn scenes_outside_their_buffer_are_skipped() {
    let out = Evaluator::render(&comp(), FrameIndex(20));
    assert_eq!(names(&out), ["underlays", "a", "overlays"]);
    assert!(out.caption.is_none());

    let out = Evaluator::render(&comp(), FrameIndex(250));
    assert_eq!(names(&out), ["underlays", "overlays"]);
    assert!(out.scenes.is_empty());
}

#[test]
fn scene_group_carries_scene_opacity() {
    let out = Evaluator::render(&comp(), FrameIndex(100));
    let b = &out.nodes[1];
    assert_eq!(b.opacity, out.scenes[0].opacity);
    assert_eq!(out.scenes[0].local_frame, 10);
    assert_eq!(b.opacity, 10.0 / 25.0);
}

#[test]
fn caption_and_background_are_attached() {
    let out = Evaluator::render(&comp(), FrameIndex(110));
    assert_eq!(out.background, Rgba8::rgb(1, 2, 3));
    assert_eq!(out.canvas, Canvas::STORY);
    assert_eq!(out.frame, FrameIndex(110));
    let cap = out.caption.expect("caption active");
    assert_eq!(cap.text, "Hello there");
}

#[test]
fn render_is_order_independent() {
    let c = comp();
    let forward: Vec<FrameOutput> = (0..200).map(|f| c.render(FrameIndex(f))).collect();
    for f in (0..200u64).rev().step_by(7) {
        assert_eq!(c.render(FrameIndex(f)), forward[f as usize]);
    }
}

#[test]
fn frames_past_the_end_still_render() {
    let out = Evaluator::render(&comp(), FrameIndex(10_000));
    assert_eq!(names(&out), ["underlays", "overlays"]);
}
