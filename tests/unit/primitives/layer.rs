use super::*;
use crate::{
    foundation::core::{Point, Rect},
    visual::color::Rgba8,
};
use serde_json::json;

fn ctx(frame: f64) -> LayerCtx {
    LayerCtx {
        frame,
        canvas: Canvas::STORY,
    }
}

fn sample_layers() -> Vec<Layer> {
    vec![
        Layer::Text(text::TextReveal::new(
            "RATIO",
            Point::new(196.0, 400.0),
            56.0,
            Rgba8::WHITE,
            0.0,
        )),
        Layer::Particles(particles::ParticleField::new(
            12,
            Rect::new(0.0, 0.0, 393.0, 852.0),
            Rgba8::WHITE,
        )),
        Layer::Vignette(overlay::Vignette::new(0.6)),
        Layer::Grain(overlay::Grain::new("textures/grain.png")),
        Layer::Phone(phone::PhoneMockup::new(
            "screens/session.png",
            Point::new(196.0, 430.0),
        )),
    ]
}

#[test]
fn kind_matches_serde_tag() {
    for layer in sample_layers() {
        let v = serde_json::to_value(&layer).unwrap();
        assert_eq!(v["type"], layer.kind());
        let back: Layer = serde_json::from_value(v).unwrap();
        assert_eq!(back, layer);
    }
}

#[test]
fn hand_written_json_uses_defaults() {
    let layer: Layer = serde_json::from_value(json!({
        "type": "text",
        "text": "See how far you can go.",
        "origin": {"x": 196, "y": 500},
        "size_px": 22,
        "color": "#ffffff",
        "timing": {"delay": 12}
    }))
    .unwrap();
    let Layer::Text(t) = &layer else {
        panic!("expected text layer");
    };
    assert_eq!(t.timing.delay, 12.0);
    assert_eq!(t.timing.duration, 20.0);
    assert_eq!(t.weight, 600);

    assert!(
        serde_json::from_value::<Layer>(json!({"type": "hologram"})).is_err()
    );
}

#[test]
fn render_is_pure_for_every_layer() {
    for layer in sample_layers() {
        for f in [-10.0, 0.0, 37.0, 400.0] {
            assert_eq!(layer.render(&ctx(f)), layer.render(&ctx(f)));
        }
    }
}
