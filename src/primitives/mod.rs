//! Animated primitives: `(local frame, static params) -> visual tree fragment`.
//!
//! Every primitive is plain data plus pure sampling functions. [`Layer`] is the serializable
//! union a scene stores.

pub(crate) mod charts;
pub(crate) mod chat;
pub(crate) mod overlay;
pub(crate) mod particles;
pub(crate) mod phone;
pub(crate) mod text;

use crate::{foundation::core::Canvas, visual::node::Node};

/// What a layer needs to know about the frame it is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerCtx {
    /// Frame relative to the owning scene (absolute for underlays and overlays).
    pub frame: f64,
    /// Output canvas.
    pub canvas: Canvas,
}

/// One primitive with its static parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    /// Full-canvas fill.
    Backdrop(overlay::Backdrop),
    /// Fade-and-rise text.
    Text(text::TextReveal),
    /// Growing horizontal rule.
    AccentLine(text::AccentLine),
    /// Counting number.
    Counter(text::Counter),
    /// Drifting dots.
    Particles(particles::ParticleField),
    /// Edge darkening.
    Vignette(overlay::Vignette),
    /// Film grain tile.
    Grain(overlay::Grain),
    /// 3D phone card.
    Phone(phone::PhoneMockup),
    /// Chat thread with typewriter reveal.
    Chat(chat::ChatThread),
    /// Score ring.
    ScoreRing(charts::ScoreRing),
    /// Radar chart.
    Radar(charts::RadarChart),
    /// Bar chart.
    Bars(charts::BarChart),
}

impl Layer {
    /// Short kind name, matching the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Backdrop(_) => "backdrop",
            Self::Text(_) => "text",
            Self::AccentLine(_) => "accent_line",
            Self::Counter(_) => "counter",
            Self::Particles(_) => "particles",
            Self::Vignette(_) => "vignette",
            Self::Grain(_) => "grain",
            Self::Phone(_) => "phone",
            Self::Chat(_) => "chat",
            Self::ScoreRing(_) => "score_ring",
            Self::Radar(_) => "radar",
            Self::Bars(_) => "bars",
        }
    }

    /// Resolve the layer at `ctx.frame`. Never fails.
    pub fn render(&self, ctx: &LayerCtx) -> Node {
        match self {
            Self::Backdrop(b) => b.render(ctx.canvas),
            Self::Text(t) => t.render(ctx),
            Self::AccentLine(l) => l.render(ctx),
            Self::Counter(c) => c.render(ctx),
            Self::Particles(p) => p.render(ctx.frame),
            Self::Vignette(v) => v.render(ctx.frame, ctx.canvas),
            Self::Grain(g) => g.render(ctx.frame, ctx.canvas),
            Self::Phone(p) => p.render(ctx.frame),
            Self::Chat(c) => c.render(ctx.frame),
            Self::ScoreRing(r) => r.render(ctx.frame),
            Self::Radar(r) => r.render(ctx.frame),
            Self::Bars(b) => b.render(ctx.frame),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/layer.rs"]
mod tests;
