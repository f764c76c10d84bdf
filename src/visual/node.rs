use crate::{
    foundation::core::{Affine, Point, Rect},
    visual::color::Rgba8,
};

/// One node of the resolved visual tree handed to the external renderer.
///
/// Transforms and opacities are relative to the parent node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Optional debugging/label name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Local transform, applied on top of the parent's.
    #[serde(default = "identity")]
    pub transform: Affine,
    /// Local opacity in `[0, 1]`, multiplied with the parent's.
    #[serde(default = "one")]
    pub opacity: f64,
    /// Node payload.
    pub kind: NodeKind,
}

fn identity() -> Affine {
    Affine::IDENTITY
}

fn one() -> f64 {
    1.0
}

/// Node payload variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Container with optional 3D perspective and clipping.
    Group(GroupNode),
    /// Single-style text run.
    Text(TextNode),
    /// Vector shape.
    Shape(ShapeNode),
    /// Symbolic image reference.
    Image(ImageNode),
}

/// Children drawn in order (painter's algorithm).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupNode {
    /// Child nodes in painter's order.
    pub children: Vec<Node>,
    /// Optional perspective rotation applied to the flattened group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<Perspective>,
    /// Optional rounded clip in local coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<RoundedRect>,
}

/// Rectangle with uniform corner radius.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundedRect {
    /// Bounds.
    pub rect: Rect,
    /// Corner radius in pixels.
    #[serde(default)]
    pub radius: f64,
}

/// CSS-style perspective rotation (`perspective(d) rotateX(..) rotateY(..)`) about `origin`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Perspective {
    /// Viewer distance in pixels; non-positive means orthographic.
    pub distance_px: f64,
    /// Rotation about the horizontal axis, degrees.
    pub rotate_x_deg: f64,
    /// Rotation about the vertical axis, degrees.
    pub rotate_y_deg: f64,
    /// Rotation pivot in local coordinates.
    pub origin: Point,
}

impl Perspective {
    /// Project a point lying on the group's `z = 0` plane.
    ///
    /// Rotates about X then Y around `origin`, then applies the perspective divide.
    pub fn project(&self, p: Point) -> Point {
        let (sx, cx) = self.rotate_x_deg.to_radians().sin_cos();
        let (sy, cy) = self.rotate_y_deg.to_radians().sin_cos();
        let x = p.x - self.origin.x;
        let y = p.y - self.origin.y;

        let y1 = y * cx;
        let z1 = y * sx;
        let x2 = x * cy + z1 * sy;
        let z2 = -x * sy + z1 * cy;

        let k = if self.distance_px > 0.0 {
            let denom = (self.distance_px - z2).max(self.distance_px * 0.05);
            self.distance_px / denom
        } else {
            1.0
        };
        Point::new(self.origin.x + x2 * k, self.origin.y + y1 * k)
    }

    /// Projected corners of `rect` (top-left, top-right, bottom-right, bottom-left).
    pub fn project_rect(&self, rect: Rect) -> [Point; 4] {
        [
            self.project(Point::new(rect.x0, rect.y0)),
            self.project(Point::new(rect.x1, rect.y0)),
            self.project(Point::new(rect.x1, rect.y1)),
            self.project(Point::new(rect.x0, rect.y1)),
        ]
    }
}

/// Horizontal text alignment relative to `origin`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// `origin` is the left edge.
    Left,
    /// `origin` is the center.
    #[default]
    Center,
    /// `origin` is the right edge.
    Right,
}

/// Text run with a single style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextNode {
    /// UTF-8 content.
    pub text: String,
    /// Baseline anchor point.
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
    /// Extra spacing between glyphs.
    #[serde(default)]
    pub letter_spacing_px: f64,
    /// Optional wrap width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width_px: Option<f64>,
}

fn default_weight() -> u16 {
    400
}

/// Vector geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Rounded rectangle.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        #[serde(default)]
        radius: f64,
    },
    /// Circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Closed polygon.
    Polygon {
        /// Vertices in order.
        points: Vec<Point>,
    },
    /// Circular arc, clockwise from `start_deg` (0 = 12 o'clock).
    Arc {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Start angle in degrees, 0 at 12 o'clock.
        start_deg: f64,
        /// Sweep in degrees.
        sweep_deg: f64,
    },
}

/// Fill paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid(Rgba8),
    /// Linear gradient between two points.
    Linear {
        /// Gradient start.
        start: Point,
        /// Gradient end.
        end: Point,
        /// Color stops, offsets in `[0, 1]`.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient.
    Radial {
        /// Center.
        center: Point,
        /// Radius at offset 1.
        radius: f64,
        /// Color stops, offsets in `[0, 1]`.
        stops: Vec<GradientStop>,
    },
}

/// One gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Color at `offset`.
    pub color: Rgba8,
}

impl GradientStop {
    /// Stop at `offset`.
    pub fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Stroke style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Width in pixels.
    pub width: f64,
    /// Round line caps.
    #[serde(default)]
    pub round_cap: bool,
}

impl Stroke {
    /// Butt-capped stroke.
    pub fn new(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            round_cap: false,
        }
    }

    /// Round-capped stroke.
    pub fn round(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            round_cap: true,
        }
    }
}

/// Filled and/or stroked shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeNode {
    /// Geometry.
    pub shape: Shape,
    /// Optional fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    /// Optional stroke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
}

/// Symbolic image reference, resolved by the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageNode {
    /// Asset path, never read by the compositor.
    pub asset: String,
    /// Destination rectangle.
    pub rect: Rect,
    /// Corner radius.
    #[serde(default)]
    pub radius: f64,
}

impl Node {
    /// Wrap a payload with identity transform and full opacity.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            name: None,
            transform: Affine::IDENTITY,
            opacity: 1.0,
            kind,
        }
    }

    /// Plain group.
    pub fn group(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Group(GroupNode {
            children,
            perspective: None,
            clip: None,
        }))
    }

    /// Text node.
    pub fn text(text: TextNode) -> Self {
        Self::new(NodeKind::Text(text))
    }

    /// Filled shape.
    pub fn fill(shape: Shape, paint: Paint) -> Self {
        Self::new(NodeKind::Shape(ShapeNode {
            shape,
            fill: Some(paint),
            stroke: None,
        }))
    }

    /// Stroked shape.
    pub fn stroke(shape: Shape, stroke: Stroke) -> Self {
        Self::new(NodeKind::Shape(ShapeNode {
            shape,
            fill: None,
            stroke: Some(stroke),
        }))
    }

    /// Image node.
    pub fn image(asset: impl Into<String>, rect: Rect, radius: f64) -> Self {
        Self::new(NodeKind::Image(ImageNode {
            asset: asset.into(),
            rect,
            radius,
        }))
    }

    /// Set the debugging name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Pre-multiply `t` onto the node's transform.
    pub fn transformed(mut self, t: Affine) -> Self {
        self.transform = t * self.transform;
        self
    }

    /// Multiply the node's opacity by `opacity`.
    pub fn faded(mut self, opacity: f64) -> Self {
        self.opacity = (self.opacity * opacity).clamp(0.0, 1.0);
        self
    }

    /// Children when this node is a group.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Group(g) => &g.children,
            _ => &[],
        }
    }

    /// Depth-first search for the first node carrying `name`.
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    /// Total number of nodes in this subtree.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }
}

impl TextNode {
    /// Centered text with default weight.
    pub fn new(text: impl Into<String>, origin: Point, size_px: f64, color: Rgba8) -> Self {
        Self {
            text: text.into(),
            origin,
            size_px,
            weight: default_weight(),
            color,
            align: TextAlign::Center,
            letter_spacing_px: 0.0,
            max_width_px: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/node.rs"]
mod tests;
