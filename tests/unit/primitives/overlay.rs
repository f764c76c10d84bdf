use super::*;
use crate::visual::node::NodeKind;

#[test]
fn vignette_breathes_within_bounds() {
    let v = Vignette::new(0.5).breathing(Wave::new(0.2, 0.1));
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for f in 0..200 {
        let s = v.strength_at(f64::from(f));
        lo = lo.min(s);
        hi = hi.max(s);
    }
    assert!(lo >= 0.3 - 1e-9 && hi <= 0.7 + 1e-9);
    assert!(hi - lo > 0.3);
    assert_eq!(Vignette::new(0.5).strength_at(123.0), 0.5);
}

#[test]
fn vignette_is_radial_over_full_canvas() {
    let node = Vignette::new(0.8).render(0.0, Canvas::STORY);
    let NodeKind::Shape(shape) = &node.kind else {
        panic!("expected shape");
    };
    let Some(Paint::Radial { center, stops, .. }) = &shape.fill else {
        panic!("expected radial paint");
    };
    assert_eq!(*center, Canvas::STORY.center());
    assert_eq!(stops.last().map(|s| s.color.a), Some(204));
}

#[test]
fn grain_offset_is_a_function_of_frame() {
    let g = Grain::new("textures/grain.png");
    let a = g.offset_at(40.0);
    let _ = g.offset_at(41.0);
    assert_eq!(g.offset_at(40.0), a);
    // Held for two frames.
    assert_eq!(g.offset_at(41.0), a);
    assert_ne!(g.offset_at(42.0), a);
    assert!(a.0 >= 0.0 && a.0 < 256.0 && a.1 >= 0.0 && a.1 < 256.0);

    let reseeded = Grain { seed: 9, ..g.clone() };
    assert_ne!(reseeded.offset_at(40.0), a);
}

#[test]
fn grain_node_references_asset_and_covers_canvas() {
    let g = Grain::new("textures/grain.png");
    let node = g.render(10.0, Canvas::STORY);
    let NodeKind::Image(img) = &node.kind else {
        panic!("expected image");
    };
    assert_eq!(img.asset, "textures/grain.png");
    assert_eq!(img.rect.width(), 393.0 + 256.0);
    assert!((node.opacity - 0.06).abs() < 1e-12);
}
