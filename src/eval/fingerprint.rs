use xxhash_rust::xxh3::Xxh3;

use crate::{
    caption::sync::ActiveCaption,
    eval::evaluator::FrameOutput,
    foundation::core::{Point, Rect},
    visual::{
        color::Rgba8,
        node::{GradientStop, Node, NodeKind, Paint, Shape, Stroke},
    },
};

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit digest of a frame's visual content.
///
/// The frame index is not hashed, so still stretches of the timeline share a fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl FrameFingerprint {
    /// 32 hex digits.
    pub fn to_hex(self) -> String {
        format!("{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint the visual content of `out`.
pub fn fingerprint_frame(out: &FrameOutput) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(out.canvas.width);
    h.write_u32(out.canvas.height);
    write_color(&mut h, out.background);
    h.write_u32(out.nodes.len() as u32);
    for n in &out.nodes {
        write_node(&mut h, n);
    }
    match &out.caption {
        Some(c) => {
            h.write_u8(1);
            write_caption(&mut h, c);
        }
        None => h.write_u8(0),
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 draw the same.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_color(h: &mut StableHasher, c: Rgba8) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

fn write_point(h: &mut StableHasher, p: Point) {
    h.write_f64(p.x);
    h.write_f64(p.y);
}

fn write_rect(h: &mut StableHasher, r: Rect) {
    h.write_f64(r.x0);
    h.write_f64(r.y0);
    h.write_f64(r.x1);
    h.write_f64(r.y1);
}

fn write_node(h: &mut StableHasher, n: &Node) {
    // Names are labels only and do not affect pixels.
    for c in n.transform.as_coeffs() {
        h.write_f64(c);
    }
    h.write_f64(n.opacity);
    match &n.kind {
        NodeKind::Group(g) => {
            h.write_u8(0);
            match &g.perspective {
                Some(p) => {
                    h.write_u8(1);
                    h.write_f64(p.distance_px);
                    h.write_f64(p.rotate_x_deg);
                    h.write_f64(p.rotate_y_deg);
                    write_point(h, p.origin);
                }
                None => h.write_u8(0),
            }
            match &g.clip {
                Some(c) => {
                    h.write_u8(1);
                    write_rect(h, c.rect);
                    h.write_f64(c.radius);
                }
                None => h.write_u8(0),
            }
            h.write_u32(g.children.len() as u32);
            for c in &g.children {
                write_node(h, c);
            }
        }
        NodeKind::Text(t) => {
            h.write_u8(1);
            h.write_str(&t.text);
            write_point(h, t.origin);
            h.write_f64(t.size_px);
            h.write_u32(u32::from(t.weight));
            write_color(h, t.color);
            h.write_u8(t.align as u8);
            h.write_f64(t.letter_spacing_px);
            h.write_f64(t.max_width_px.unwrap_or(-1.0));
        }
        NodeKind::Shape(s) => {
            h.write_u8(2);
            write_shape(h, &s.shape);
            match &s.fill {
                Some(p) => {
                    h.write_u8(1);
                    write_paint(h, p);
                }
                None => h.write_u8(0),
            }
            match &s.stroke {
                Some(st) => {
                    h.write_u8(1);
                    write_stroke(h, st);
                }
                None => h.write_u8(0),
            }
        }
        NodeKind::Image(i) => {
            h.write_u8(3);
            h.write_str(&i.asset);
            write_rect(h, i.rect);
            h.write_f64(i.radius);
        }
    }
}

fn write_shape(h: &mut StableHasher, s: &Shape) {
    match s {
        Shape::Rect { rect, radius } => {
            h.write_u8(0);
            write_rect(h, *rect);
            h.write_f64(*radius);
        }
        Shape::Circle { center, radius } => {
            h.write_u8(1);
            write_point(h, *center);
            h.write_f64(*radius);
        }
        Shape::Line { from, to } => {
            h.write_u8(2);
            write_point(h, *from);
            write_point(h, *to);
        }
        Shape::Polygon { points } => {
            h.write_u8(3);
            h.write_u32(points.len() as u32);
            for p in points {
                write_point(h, *p);
            }
        }
        Shape::Arc {
            center,
            radius,
            start_deg,
            sweep_deg,
        } => {
            h.write_u8(4);
            write_point(h, *center);
            h.write_f64(*radius);
            h.write_f64(*start_deg);
            h.write_f64(*sweep_deg);
        }
    }
}

fn write_paint(h: &mut StableHasher, p: &Paint) {
    match p {
        Paint::Solid(c) => {
            h.write_u8(0);
            write_color(h, *c);
        }
        Paint::Linear { start, end, stops } => {
            h.write_u8(1);
            write_point(h, *start);
            write_point(h, *end);
            write_stops(h, stops);
        }
        Paint::Radial {
            center,
            radius,
            stops,
        } => {
            h.write_u8(2);
            write_point(h, *center);
            h.write_f64(*radius);
            write_stops(h, stops);
        }
    }
}

fn write_stops(h: &mut StableHasher, stops: &[GradientStop]) {
    h.write_u32(stops.len() as u32);
    for s in stops {
        h.write_f64(s.offset);
        write_color(h, s.color);
    }
}

fn write_stroke(h: &mut StableHasher, s: &Stroke) {
    write_color(h, s.color);
    h.write_f64(s.width);
    h.write_bool(s.round_cap);
}

fn write_caption(h: &mut StableHasher, c: &ActiveCaption) {
    h.write_u32(c.index as u32);
    h.write_u32(c.words.len() as u32);
    for w in &c.words {
        h.write_str(&w.text);
        h.write_bool(w.highlighted);
    }
    h.write_f64(c.opacity);
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
