use crate::{
    animation::{
        interpolate::clamp01,
        wave::{Wave, golden_angle_rad, golden_fract, wrap},
    },
    foundation::core::{Point, Rect},
    visual::{
        color::Rgba8,
        node::{Node, Paint, Shape},
    },
};

/// Fraction of the box height over which particles fade at the top and bottom edges.
const EDGE_FADE: f64 = 0.1;

/// Field of softly drifting dots.
///
/// Nothing is stored per particle: particle `i` at frame `f` is derived from `i` (golden-angle
/// spacing inside `bounds`) and `f` (upward drift wrapped modulo the box height), so any frame
/// can be sampled directly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleField {
    /// Number of particles.
    pub count: u32,
    /// Box the field lives in; drift wraps over its height.
    pub bounds: Rect,
    /// `[min, max]` upward speed in pixels per frame.
    #[serde(default = "default_speed")]
    pub speed: [f64; 2],
    /// `[min, max]` dot radius in pixels.
    #[serde(default = "default_radius")]
    pub radius: [f64; 2],
    /// Dot color.
    pub color: Rgba8,
    /// Peak opacity.
    #[serde(default = "default_max_opacity")]
    pub max_opacity: f64,
    /// Horizontal sway amplitude in pixels.
    #[serde(default = "default_sway")]
    pub sway_px: f64,
    /// Twinkle speed in radians per frame.
    #[serde(default = "default_twinkle")]
    pub twinkle: f64,
}

fn default_speed() -> [f64; 2] {
    [0.3, 1.1]
}

fn default_radius() -> [f64; 2] {
    [1.0, 2.6]
}

fn default_max_opacity() -> f64 {
    0.6
}

fn default_sway() -> f64 {
    6.0
}

fn default_twinkle() -> f64 {
    0.05
}

/// One evaluated particle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    /// Particle index.
    pub index: u32,
    /// Center in canvas coordinates.
    pub position: Point,
    /// Dot radius.
    pub radius: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl ParticleField {
    /// Field with default motion parameters.
    pub fn new(count: u32, bounds: Rect, color: Rgba8) -> Self {
        Self {
            count,
            bounds,
            speed: default_speed(),
            radius: default_radius(),
            color,
            max_opacity: default_max_opacity(),
            sway_px: default_sway(),
            twinkle: default_twinkle(),
        }
    }

    /// Particle `index` at `frame`.
    pub fn particle(&self, index: u32, frame: f64) -> Particle {
        let angle = golden_angle_rad(index);
        let w = self.bounds.width().max(0.0);
        let h = self.bounds.height().max(0.0);

        // Fibonacci lattice: x from the golden angle, base y stratified by index.
        let u = angle / std::f64::consts::TAU;
        let v = (f64::from(index) + 0.5) / f64::from(self.count.max(1));

        let speed = lerp(self.speed, golden_fract(index.wrapping_mul(3), 0.37));
        let radius = lerp(self.radius, golden_fract(index.wrapping_mul(5), 0.11));

        let y_rel = wrap(v * h - frame * speed, h);
        let sway = Wave::new(self.sway_px, 0.02).with_phase(angle).sample(frame);
        let x = self.bounds.x0 + u * w + sway;
        let y = self.bounds.y0 + y_rel;

        let edge = if h > 0.0 {
            let t = y_rel / h;
            clamp01(t.min(1.0 - t) / EDGE_FADE)
        } else {
            1.0
        };
        let twinkle = 0.35 + 0.65 * Wave::new(1.0, self.twinkle).with_phase(angle).sample01(frame);

        Particle {
            index,
            position: Point::new(x, y),
            radius,
            opacity: clamp01(self.max_opacity * twinkle * edge),
        }
    }

    /// Every particle at `frame`, in index order.
    pub fn particles(&self, frame: f64) -> Vec<Particle> {
        (0..self.count).map(|i| self.particle(i, frame)).collect()
    }

    pub(crate) fn render(&self, frame: f64) -> Node {
        let dots = self
            .particles(frame)
            .into_iter()
            .map(|p| {
                Node::fill(
                    Shape::Circle {
                        center: p.position,
                        radius: p.radius,
                    },
                    Paint::Solid(self.color),
                )
                .faded(p.opacity)
            })
            .collect();
        Node::group(dots).named("particles")
    }
}

fn lerp([lo, hi]: [f64; 2], t: f64) -> f64 {
    lo + (hi - lo) * t
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/particles.rs"]
mod tests;
