use super::*;
use crate::composition::dsl::{CompositionBuilder, SceneBuilder};
use crate::foundation::core::Point;
use crate::primitives::{Layer, text::TextReveal};
use crate::visual::color::Rgba8;

fn comp() -> Composition {
    CompositionBuilder::story("pipeline", 120)
        .scene(
            SceneBuilder::new("title", 0, 120)
                .layer(Layer::Text(TextReveal::new(
                    "Hold",
                    Point::new(196.0, 400.0),
                    32.0,
                    Rgba8::WHITE,
                    0.0,
                )))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn sequential_frames_come_back_in_order() {
    let c = comp();
    let (frames, stats) = render_frames(&c, range(10, 20), &RenderThreading::default()).unwrap();
    let idx: Vec<u64> = frames.iter().map(|f| f.frame.0).collect();
    assert_eq!(idx, (10..20).collect::<Vec<_>>());
    assert_eq!(stats.frames_total, 10);
}

#[test]
fn parallel_matches_sequential() {
    let c = comp();
    let seq = render_frames(&c, range(0, 120), &RenderThreading::default()).unwrap();
    let par = render_frames(
        &c,
        range(0, 120),
        &RenderThreading {
            parallel: true,
            chunk_size: 7,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn settled_frames_are_not_distinct() {
    // Fade-in and text reveal are done by frame 25; nothing moves after that.
    let c = comp();
    let (_, stats) = render_frames(&c, range(30, 90), &RenderThreading::default()).unwrap();
    assert_eq!(stats.frames_total, 60);
    assert_eq!(stats.frames_distinct, 1);
}

#[test]
fn rejects_empty_range_and_zero_threads() {
    let c = comp();
    assert!(render_frames(&c, range(5, 5), &RenderThreading::default()).is_err());
    let err = render_frames(
        &c,
        range(0, 10),
        &RenderThreading {
            parallel: true,
            chunk_size: 0,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}
