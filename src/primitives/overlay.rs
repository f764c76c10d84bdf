use crate::{
    animation::{
        interpolate::clamp01,
        wave::{Wave, hash01},
    },
    foundation::core::{Affine, Canvas, Rect},
    visual::{
        color::Rgba8,
        node::{GradientStop, Node, Paint, Shape},
    },
};

/// Full-canvas paint, usually the first underlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Backdrop {
    /// Fill paint.
    pub paint: Paint,
}

impl Backdrop {
    pub(crate) fn render(&self, canvas: Canvas) -> Node {
        Node::fill(
            Shape::Rect {
                rect: canvas.rect(),
                radius: 0.0,
            },
            self.paint.clone(),
        )
    }
}

/// Radial darkening toward the canvas edges.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vignette {
    /// Edge color (alpha is replaced by `strength`).
    #[serde(default = "default_vignette_color")]
    pub color: Rgba8,
    /// Edge opacity in `[0, 1]`.
    pub strength: f64,
    /// Gradient offset where darkening begins.
    #[serde(default = "default_inner")]
    pub inner: f64,
    /// Optional slow pulse added to `strength`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breathe: Option<Wave>,
}

fn default_vignette_color() -> Rgba8 {
    Rgba8::BLACK
}

fn default_inner() -> f64 {
    0.45
}

impl Vignette {
    /// Static vignette.
    pub fn new(strength: f64) -> Self {
        Self {
            color: Rgba8::BLACK,
            strength,
            inner: default_inner(),
            breathe: None,
        }
    }

    /// Builder: sinusoidal breathing of the edge strength.
    pub fn breathing(mut self, wave: Wave) -> Self {
        self.breathe = Some(wave);
        self
    }

    /// Edge opacity at `frame`.
    pub fn strength_at(&self, frame: f64) -> f64 {
        let pulse = self.breathe.map_or(0.0, |w| w.sample(frame));
        clamp01(self.strength + pulse)
    }

    pub(crate) fn render(&self, frame: f64, canvas: Canvas) -> Node {
        let center = canvas.center();
        let radius = center.to_vec2().hypot();
        let edge = self.color.fade(self.strength_at(frame));
        let paint = Paint::Radial {
            center,
            radius,
            stops: vec![
                GradientStop::new(0.0, Rgba8::TRANSPARENT),
                GradientStop::new(clamp01(self.inner), Rgba8::TRANSPARENT),
                GradientStop::new(1.0, edge),
            ],
        };
        Node::fill(
            Shape::Rect {
                rect: canvas.rect(),
                radius: 0.0,
            },
            paint,
        )
        .named("vignette")
    }
}

/// Film grain: a noise tile whose offset jumps every `hold_frames`.
///
/// The offset is a hash of the frame bucket, never a running generator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Grain {
    /// Symbolic noise texture reference.
    pub asset: String,
    /// Overlay opacity.
    #[serde(default = "default_grain_opacity")]
    pub opacity: f64,
    /// Tile edge length in pixels.
    #[serde(default = "default_tile")]
    pub tile_px: f64,
    /// Hash seed.
    #[serde(default)]
    pub seed: u64,
    /// Frames each offset is held for.
    #[serde(default = "default_hold")]
    pub hold_frames: u32,
}

fn default_grain_opacity() -> f64 {
    0.06
}

fn default_tile() -> f64 {
    256.0
}

fn default_hold() -> u32 {
    2
}

impl Grain {
    /// Grain with default parameters.
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            opacity: default_grain_opacity(),
            tile_px: default_tile(),
            seed: 0,
            hold_frames: default_hold(),
        }
    }

    /// Tile offset `(dx, dy)` in `[0, tile_px)` for `frame`.
    pub fn offset_at(&self, frame: f64) -> (f64, f64) {
        let bucket = (frame / f64::from(self.hold_frames.max(1))).floor();
        // Negative frames wrap into the upper half of the key space.
        let key = bucket as i64 as u64;
        let tile = self.tile_px.max(0.0);
        (
            hash01(self.seed, key) * tile,
            hash01(self.seed ^ 0x5bd1_e995, key) * tile,
        )
    }

    pub(crate) fn render(&self, frame: f64, canvas: Canvas) -> Node {
        let (dx, dy) = self.offset_at(frame);
        let t = self.tile_px.max(0.0);
        let rect = Rect::new(0.0, 0.0, canvas.w() + t, canvas.h() + t);
        Node::image(self.asset.clone(), rect, 0.0)
            .transformed(Affine::translate((-dx, -dy)))
            .faded(self.opacity)
            .named("grain")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/overlay.rs"]
mod tests;
