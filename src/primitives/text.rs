use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
    },
    foundation::core::{Affine, Point, Rect},
    primitives::LayerCtx,
    visual::{
        color::Rgba8,
        node::{Node, Paint, Shape, TextAlign, TextNode},
    },
};

/// Entrance window shared by text-like primitives.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealTiming {
    /// Local frame the entrance starts at.
    #[serde(default)]
    pub delay: f64,
    /// Entrance length in frames.
    #[serde(default = "default_reveal_duration")]
    pub duration: f64,
    /// Initial downward offset in pixels.
    #[serde(default = "default_reveal_distance")]
    pub distance: f64,
    /// Easing for both opacity and offset.
    #[serde(default = "default_reveal_ease")]
    pub ease: Ease,
}

fn default_reveal_duration() -> f64 {
    20.0
}

fn default_reveal_distance() -> f64 {
    30.0
}

fn default_reveal_ease() -> Ease {
    Ease::OutCubic
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: default_reveal_duration(),
            distance: default_reveal_distance(),
            ease: default_reveal_ease(),
        }
    }
}

impl RevealTiming {
    /// Entrance starting at `delay`.
    pub fn at(delay: f64) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Opacity `0 -> 1` and offset `distance -> 0` over `[delay, delay + duration]`.
    pub fn sample(&self, frame: f64) -> Reveal {
        let window = [self.delay, self.delay + self.duration.max(0.0)];
        let opts = InterpolateOpts::eased(self.ease);
        Reveal {
            opacity: interpolate(frame, &window, &[0.0, 1.0], opts),
            offset_y: interpolate(frame, &window, &[self.distance, 0.0], opts),
        }
    }
}

/// Sampled entrance state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Reveal {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset in pixels (positive is down).
    pub offset_y: f64,
}

/// A line of text that fades and slides up into place.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextReveal {
    /// Content.
    pub text: String,
    /// Resting anchor.
    pub origin: Point,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS font weight.
    #[serde(default = "default_weight")]
    pub weight: u16,
    /// Fill color.
    pub color: Rgba8,
    /// Alignment relative to `origin`.
    #[serde(default)]
    pub align: TextAlign,
    /// Extra glyph spacing.
    #[serde(default)]
    pub letter_spacing_px: f64,
    /// Optional wrap width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width_px: Option<f64>,
    /// Entrance timing.
    #[serde(default)]
    pub timing: RevealTiming,
}

fn default_weight() -> u16 {
    600
}

impl TextReveal {
    /// Centered text with default entrance at `delay`.
    pub fn new(
        text: impl Into<String>,
        origin: Point,
        size_px: f64,
        color: Rgba8,
        delay: f64,
    ) -> Self {
        Self {
            text: text.into(),
            origin,
            size_px,
            weight: default_weight(),
            color,
            align: TextAlign::Center,
            letter_spacing_px: 0.0,
            max_width_px: None,
            timing: RevealTiming::at(delay),
        }
    }

    /// Builder: font weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Builder: alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Builder: wrap width.
    pub fn wrap(mut self, max_width_px: f64) -> Self {
        self.max_width_px = Some(max_width_px);
        self
    }

    /// Builder: letter spacing.
    pub fn tracking(mut self, letter_spacing_px: f64) -> Self {
        self.letter_spacing_px = letter_spacing_px;
        self
    }

    pub(crate) fn render(&self, ctx: &LayerCtx) -> Node {
        let r = self.timing.sample(ctx.frame);
        Node::text(TextNode {
            text: self.text.clone(),
            origin: self.origin,
            size_px: self.size_px,
            weight: self.weight,
            color: self.color,
            align: self.align,
            letter_spacing_px: self.letter_spacing_px,
            max_width_px: self.max_width_px,
        })
        .transformed(Affine::translate((0.0, r.offset_y)))
        .faded(r.opacity)
    }
}

/// Which point of the line stays fixed while it grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAnchor {
    /// Grows rightwards from `at`.
    Left,
    /// Grows symmetrically around `at`.
    #[default]
    Center,
}

/// Thin horizontal rule that draws itself in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccentLine {
    /// Anchor point (left end or center, per `anchor`).
    pub at: Point,
    /// Full width in pixels.
    pub width: f64,
    /// Thickness in pixels.
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    /// Line color.
    pub color: Rgba8,
    /// Growth anchor.
    #[serde(default)]
    pub anchor: LineAnchor,
    /// Start frame.
    #[serde(default)]
    pub delay: f64,
    /// Growth duration.
    #[serde(default = "default_line_duration")]
    pub duration: f64,
}

fn default_thickness() -> f64 {
    2.0
}

fn default_line_duration() -> f64 {
    24.0
}

impl AccentLine {
    /// Centered accent line.
    pub fn centered(at: Point, width: f64, color: Rgba8, delay: f64) -> Self {
        Self {
            at,
            width,
            thickness: default_thickness(),
            color,
            anchor: LineAnchor::Center,
            delay,
            duration: default_line_duration(),
        }
    }

    /// Current drawn width.
    pub fn width_at(&self, frame: f64) -> f64 {
        interpolate(
            frame,
            &[self.delay, self.delay + self.duration.max(0.0)],
            &[0.0, self.width.max(0.0)],
            InterpolateOpts::eased(Ease::OutCubic),
        )
    }

    pub(crate) fn render(&self, ctx: &LayerCtx) -> Node {
        let w = self.width_at(ctx.frame);
        let half_t = self.thickness / 2.0;
        let x0 = match self.anchor {
            LineAnchor::Left => self.at.x,
            LineAnchor::Center => self.at.x - w / 2.0,
        };
        Node::fill(
            Shape::Rect {
                rect: Rect::new(x0, self.at.y - half_t, x0 + w, self.at.y + half_t),
                radius: half_t,
            },
            Paint::Solid(self.color),
        )
    }
}

/// A number that counts up to its target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Counter {
    /// Starting value.
    #[serde(default)]
    pub from: f64,
    /// Final value.
    pub to: f64,
    /// Start frame.
    #[serde(default)]
    pub delay: f64,
    /// Count duration in frames.
    #[serde(default = "default_count_duration")]
    pub duration: f64,
    /// Digits after the decimal point.
    #[serde(default)]
    pub decimals: usize,
    /// Text before the number.
    #[serde(default)]
    pub prefix: String,
    /// Text after the number.
    #[serde(default)]
    pub suffix: String,
    /// Anchor point.
    pub origin: Point,
    /// Font size.
    pub size_px: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Alignment.
    #[serde(default)]
    pub align: TextAlign,
}

fn default_count_duration() -> f64 {
    45.0
}

impl Counter {
    /// Centered integer counter from 0 to `to`, starting at frame 0.
    pub fn new(to: f64, origin: Point, size_px: f64, color: Rgba8) -> Self {
        Self {
            from: 0.0,
            to,
            delay: 0.0,
            duration: default_count_duration(),
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
            origin,
            size_px,
            color,
            align: TextAlign::Center,
        }
    }

    /// Builder: count over `[delay, delay + duration]`.
    pub fn window(mut self, delay: f64, duration: f64) -> Self {
        self.delay = delay;
        self.duration = duration;
        self
    }

    /// Builder: text around the number.
    pub fn affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Value at `frame`, eased with cubic ease-out.
    pub fn value_at(&self, frame: f64) -> f64 {
        interpolate(
            frame,
            &[self.delay, self.delay + self.duration.max(0.0)],
            &[self.from, self.to],
            InterpolateOpts::eased(Ease::OutCubic),
        )
    }

    /// Display string at `frame`.
    pub fn label_at(&self, frame: f64) -> String {
        let v = self.value_at(frame);
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals, v, self.suffix
        )
    }

    pub(crate) fn render(&self, ctx: &LayerCtx) -> Node {
        let fade = interpolate(
            ctx.frame,
            &[self.delay - 6.0, self.delay + 6.0],
            &[0.0, 1.0],
            InterpolateOpts::default(),
        );
        Node::text(TextNode {
            text: self.label_at(ctx.frame),
            origin: self.origin,
            size_px: self.size_px,
            weight: 700,
            color: self.color,
            align: self.align,
            letter_spacing_px: 0.0,
            max_width_px: None,
        })
        .faded(fade)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/text.rs"]
mod tests;
