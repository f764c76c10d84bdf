use crate::{
    animation::interpolate::{InterpolateOpts, clamp01, ease, interpolate},
    foundation::core::{Point, Rect},
    visual::{
        color::Rgba8,
        node::{Node, NodeKind, Paint, Shape, ShapeNode, Stroke, TextAlign, TextNode},
    },
};

/// A scored dimension, `target_score` in `0..=100`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dimension {
    /// Axis or bar label.
    pub label: String,
    /// Final score.
    pub target_score: f64,
}

impl Dimension {
    /// Dimension; the score is clamped to `0..=100` when animated.
    pub fn new(label: impl Into<String>, target_score: f64) -> Self {
        Self {
            label: label.into(),
            target_score,
        }
    }

    fn target(&self) -> f64 {
        if self.target_score.is_nan() {
            0.0
        } else {
            self.target_score.clamp(0.0, 100.0)
        }
    }
}

/// Circular progress ring filling to a score.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreRing {
    /// Ring center.
    pub center: Point,
    /// Ring radius (stroke centerline).
    pub radius: f64,
    /// Stroke width.
    #[serde(default = "default_ring_thickness")]
    pub thickness: f64,
    /// Final score in `0..=100`.
    pub target: f64,
    /// Local frame the fill starts.
    pub start: f64,
    /// Local frame the fill lands.
    pub end: f64,
    /// Background track color.
    pub track: Rgba8,
    /// Fill color.
    pub color: Rgba8,
    /// Caption under the number.
    #[serde(default)]
    pub label: String,
}

fn default_ring_thickness() -> f64 {
    12.0
}

impl ScoreRing {
    /// Displayed score at `frame`.
    pub fn value_at(&self, frame: f64) -> f64 {
        let target = if self.target.is_nan() {
            0.0
        } else {
            self.target.clamp(0.0, 100.0)
        };
        ease(frame, 0.0, target, self.start, self.end)
    }

    /// Filled sweep in degrees.
    pub fn sweep_at(&self, frame: f64) -> f64 {
        360.0 * self.value_at(frame) / 100.0
    }

    pub(crate) fn render(&self, frame: f64) -> Node {
        let value = self.value_at(frame);
        let track = Node::stroke(
            Shape::Circle {
                center: self.center,
                radius: self.radius,
            },
            Stroke::new(self.track, self.thickness),
        );
        let arc = Node::stroke(
            Shape::Arc {
                center: self.center,
                radius: self.radius,
                start_deg: 0.0,
                sweep_deg: self.sweep_at(frame),
            },
            Stroke::round(self.color, self.thickness),
        )
        .named("ring-fill");
        let number = Node::text(TextNode {
            text: format!("{value:.0}"),
            origin: Point::new(self.center.x, self.center.y + self.radius * 0.18),
            size_px: self.radius * 0.55,
            weight: 700,
            color: Rgba8::WHITE,
            align: TextAlign::Center,
            letter_spacing_px: 0.0,
            max_width_px: None,
        })
        .named("ring-value");
        let mut children = vec![track, arc, number];
        if !self.label.is_empty() {
            children.push(Node::text(TextNode::new(
                self.label.clone(),
                Point::new(self.center.x, self.center.y + self.radius * 0.5),
                self.radius * 0.16,
                self.track,
            )));
        }
        Node::group(children).named("score-ring")
    }
}

/// Spider chart with one axis per dimension.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadarChart {
    /// Chart center.
    pub center: Point,
    /// Radius of a score of 100.
    pub radius: f64,
    /// Axes, clockwise from 12 o'clock.
    pub dimensions: Vec<Dimension>,
    /// Local frame the first axis starts growing.
    pub start: f64,
    /// Local frame the first axis lands.
    pub end: f64,
    /// Extra delay per axis.
    #[serde(default)]
    pub stagger: f64,
    /// Concentric grid polygons.
    #[serde(default = "default_rings")]
    pub grid_rings: u32,
    /// Grid and label color.
    pub grid: Rgba8,
    /// Data polygon color.
    pub color: Rgba8,
}

fn default_rings() -> u32 {
    4
}

impl RadarChart {
    /// Angle of axis `i` in radians; axis 0 points up, spacing is `360 / n` degrees.
    pub fn axis_angle(&self, i: usize) -> f64 {
        let n = self.dimensions.len().max(1) as f64;
        (i as f64 * 360.0 / n - 90.0).to_radians()
    }

    /// Eased score of axis `i` at `frame`.
    pub fn value_at(&self, i: usize, frame: f64) -> f64 {
        let Some(d) = self.dimensions.get(i) else {
            return 0.0;
        };
        let delay = self.stagger * i as f64;
        ease(frame, 0.0, d.target(), self.start + delay, self.end + delay)
    }

    /// Data polygon vertices at `frame`.
    pub fn vertices(&self, frame: f64) -> Vec<Point> {
        (0..self.dimensions.len())
            .map(|i| self.polar(i, self.radius * self.value_at(i, frame) / 100.0))
            .collect()
    }

    fn polar(&self, i: usize, r: f64) -> Point {
        let a = self.axis_angle(i);
        Point::new(self.center.x + r * a.cos(), self.center.y + r * a.sin())
    }

    pub(crate) fn render(&self, frame: f64) -> Node {
        let n = self.dimensions.len();
        let grid_in = interpolate(
            frame,
            &[self.start - 15.0, self.start],
            &[0.0, 1.0],
            InterpolateOpts::default(),
        );
        let mut children = Vec::new();
        for ring in 1..=self.grid_rings {
            let r = self.radius * f64::from(ring) / f64::from(self.grid_rings);
            children.push(Node::stroke(
                Shape::Polygon {
                    points: (0..n).map(|i| self.polar(i, r)).collect(),
                },
                Stroke::new(self.grid.fade(0.35), 1.0),
            ));
        }
        for i in 0..n {
            children.push(Node::stroke(
                Shape::Line {
                    from: self.center,
                    to: self.polar(i, self.radius),
                },
                Stroke::new(self.grid.fade(0.35), 1.0),
            ));
        }
        let grid = Node::group(children).faded(grid_in);

        let points = self.vertices(frame);
        let area = Node::new(NodeKind::Shape(ShapeNode {
            shape: Shape::Polygon { points },
            fill: Some(Paint::Solid(self.color.fade(0.35))),
            stroke: Some(Stroke::new(self.color, 2.0)),
        }))
        .named("radar-area");

        let labels = self
            .dimensions
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let delay = self.stagger * i as f64;
                let shown = clamp01((frame - self.start - delay) / 10.0);
                Node::text(TextNode::new(
                    d.label.clone(),
                    self.polar(i, self.radius * 1.18),
                    12.0,
                    self.grid,
                ))
                .faded(shown)
            })
            .collect();

        Node::group(vec![grid, area, Node::group(labels)]).named("radar")
    }
}

/// Horizontal bars, one per dimension, growing with a stagger.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BarChart {
    /// Top-left of the first row.
    pub origin: Point,
    /// Width of a score of 100.
    pub width: f64,
    /// Bar thickness.
    #[serde(default = "default_bar_height")]
    pub bar_height: f64,
    /// Row pitch (label plus bar).
    #[serde(default = "default_row")]
    pub row_height: f64,
    /// Rows.
    pub dimensions: Vec<Dimension>,
    /// Local frame the first bar starts.
    pub start: f64,
    /// Grow duration per bar.
    #[serde(default = "default_bar_duration")]
    pub duration: f64,
    /// Extra delay per row.
    #[serde(default = "default_bar_stagger")]
    pub stagger: f64,
    /// Track color.
    pub track: Rgba8,
    /// Fill color.
    pub color: Rgba8,
    /// Label color.
    pub label: Rgba8,
}

fn default_bar_height() -> f64 {
    8.0
}

fn default_row() -> f64 {
    44.0
}

fn default_bar_duration() -> f64 {
    30.0
}

fn default_bar_stagger() -> f64 {
    6.0
}

impl BarChart {
    /// Score shown by row `i` at `frame`.
    pub fn value_at(&self, i: usize, frame: f64) -> f64 {
        let Some(d) = self.dimensions.get(i) else {
            return 0.0;
        };
        let s = self.start + self.stagger * i as f64;
        ease(frame, 0.0, d.target(), s, s + self.duration)
    }

    /// Filled bar length of row `i`.
    pub fn fill_width(&self, i: usize, frame: f64) -> f64 {
        self.width * self.value_at(i, frame) / 100.0
    }

    pub(crate) fn render(&self, frame: f64) -> Node {
        let rows = self
            .dimensions
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let top = self.origin.y + self.row_height * i as f64;
                let bar_y = top + 20.0;
                let value = self.value_at(i, frame);
                let label = Node::text(TextNode {
                    text: d.label.clone(),
                    origin: Point::new(self.origin.x, top + 13.0),
                    size_px: 13.0,
                    weight: 500,
                    color: self.label,
                    align: TextAlign::Left,
                    letter_spacing_px: 0.0,
                    max_width_px: None,
                });
                let score = Node::text(TextNode {
                    text: format!("{value:.0}"),
                    origin: Point::new(self.origin.x + self.width, top + 13.0),
                    size_px: 13.0,
                    weight: 700,
                    color: self.color,
                    align: TextAlign::Right,
                    letter_spacing_px: 0.0,
                    max_width_px: None,
                });
                let track = Node::fill(
                    Shape::Rect {
                        rect: Rect::new(
                            self.origin.x,
                            bar_y,
                            self.origin.x + self.width,
                            bar_y + self.bar_height,
                        ),
                        radius: self.bar_height / 2.0,
                    },
                    Paint::Solid(self.track),
                );
                let fill = Node::fill(
                    Shape::Rect {
                        rect: Rect::new(
                            self.origin.x,
                            bar_y,
                            self.origin.x + self.fill_width(i, frame),
                            bar_y + self.bar_height,
                        ),
                        radius: self.bar_height / 2.0,
                    },
                    Paint::Solid(self.color),
                );
                let shown = clamp01((frame - self.start - self.stagger * i as f64 + 8.0) / 8.0);
                Node::group(vec![label, score, track, fill])
                    .faded(shown)
                    .named(format!("bar-{i}"))
            })
            .collect();
        Node::group(rows).named("bars")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/charts.rs"]
mod tests;
