//! The RATIO promotional videos, declared with the builder DSL.
//!
//! Each module exposes an `ID` and a `build()` constructor; [`crate::registry`] indexes them.

pub mod careers;
pub mod feedback;
pub mod launch;
pub mod moot_court;
pub(crate) mod palette;

use crate::{
    animation::wave::Wave,
    composition::dsl::CompositionBuilder,
    foundation::core::{Canvas, Point, Rect},
    primitives::{
        Layer,
        overlay::{Backdrop, Grain, Vignette},
        particles::ParticleField,
        text::{AccentLine, TextReveal},
    },
    visual::node::{GradientStop, Paint},
};

use palette::{DUST, GOLD, INK, IVORY, NAVY, SLATE};

const GRAIN_TILE: &str = "textures/grain-256.png";

/// Story-format builder with the house look: navy gradient, drifting dust, breathing
/// vignette and grain.
pub(crate) fn house_style(id: &str, duration_in_frames: u64) -> CompositionBuilder {
    let canvas = Canvas::STORY;
    CompositionBuilder::story(id, duration_in_frames)
        .background(INK)
        .underlay(Layer::Backdrop(Backdrop {
            paint: Paint::Linear {
                start: Point::new(0.0, 0.0),
                end: Point::new(0.0, canvas.h()),
                stops: vec![GradientStop::new(0.0, NAVY), GradientStop::new(1.0, INK)],
            },
        }))
        .underlay(Layer::Particles(ParticleField::new(36, canvas.rect(), DUST)))
        .overlay(Layer::Vignette(
            Vignette::new(0.55).breathing(Wave::new(0.05, 0.03)),
        ))
        .overlay(Layer::Grain(Grain::new(GRAIN_TILE)))
}

/// Title, gold rule and optional subtitle stacked around `y`.
pub(crate) fn title_block(title: &str, subtitle: Option<&str>, y: f64, delay: f64) -> Vec<Layer> {
    let cx = Canvas::STORY.w() / 2.0;
    let mut layers = vec![
        Layer::Text(
            TextReveal::new(title, Point::new(cx, y), 34.0, IVORY, delay)
                .weight(700)
                .wrap(330.0),
        ),
        Layer::AccentLine(AccentLine::centered(
            Point::new(cx, y + 28.0),
            72.0,
            GOLD,
            delay + 10.0,
        )),
    ];
    if let Some(sub) = subtitle {
        layers.push(Layer::Text(
            TextReveal::new(sub, Point::new(cx, y + 62.0), 16.0, SLATE, delay + 16.0)
                .weight(400)
                .wrap(300.0),
        ));
    }
    layers
}

/// Canvas inset used for charts and chat viewports.
pub(crate) fn content_area(top: f64, bottom: f64) -> Rect {
    Rect::new(24.0, top, Canvas::STORY.w() - 24.0, bottom)
}
