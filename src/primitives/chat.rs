use unicode_segmentation::UnicodeSegmentation;

use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
        wave::Wave,
    },
    foundation::core::{Affine, Point, Rect},
    visual::{
        color::Rgba8,
        node::{GroupNode, Node, NodeKind, Paint, RoundedRect, Shape, TextAlign, TextNode},
    },
};

/// Phase offset between consecutive typing dots, in frames.
pub const DOT_OFFSET_FRAMES: f64 = 5.0;

/// Angular speed of the typing dots, radians per frame.
pub const DOT_SPEED: f64 = 0.3;

/// Frames a bubble takes to pop in.
const BUBBLE_POP_FRAMES: f64 = 8.0;

const CURSOR: &str = "\u{258C}";

/// Who sent a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The student; right-aligned.
    User,
    /// The AI judge; left-aligned.
    Assistant,
}

/// One simulated chat message.
///
/// Three phases keyed purely on the queried frame: dormant before `typing_start`, typing
/// indicator until `message_start`, then a typewriter reveal at `chars_per_frame`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    /// Sender.
    pub role: ChatRole,
    /// Full message text.
    pub text: String,
    /// Frame the typing indicator appears.
    pub typing_start: i64,
    /// Frame the reveal starts.
    pub message_start: i64,
    /// Reveal speed in grapheme clusters per frame.
    pub chars_per_frame: f64,
}

/// Message phase at a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatPhase {
    /// Not shown yet.
    Dormant,
    /// Typing indicator.
    Typing,
    /// Text revealing (or fully revealed).
    Revealing,
}

/// Resolved message state at a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChatState {
    /// Current phase.
    pub phase: ChatPhase,
    /// Grapheme clusters shown.
    pub visible_chars: usize,
    /// Grapheme clusters in the full text.
    pub total_chars: usize,
    /// Revealed prefix.
    pub text: String,
    /// Cursor shown while the reveal is in progress.
    pub cursor_visible: bool,
    /// Typing dot levels in `[0, 1]`, all 0 outside the typing phase.
    pub dots: [f64; 3],
}

impl ChatMessage {
    /// Message with the given timing.
    pub fn new(
        role: ChatRole,
        text: impl Into<String>,
        typing_start: i64,
        message_start: i64,
        chars_per_frame: f64,
    ) -> Self {
        Self {
            role,
            text: text.into(),
            typing_start,
            message_start,
            chars_per_frame,
        }
    }

    /// Length of the full text in grapheme clusters.
    pub fn total_chars(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Phase at `frame`.
    pub fn phase(&self, frame: f64) -> ChatPhase {
        if frame < self.typing_start as f64 {
            ChatPhase::Dormant
        } else if frame < self.message_start as f64 {
            ChatPhase::Typing
        } else {
            ChatPhase::Revealing
        }
    }

    /// Grapheme clusters visible at `frame`: `round((frame - message_start) * chars_per_frame)`,
    /// clamped to the text length. A non-positive or non-finite speed shows the whole text.
    pub fn visible_chars(&self, frame: f64) -> usize {
        let total = self.total_chars();
        let elapsed = frame - self.message_start as f64;
        if elapsed.is_nan() || elapsed < 0.0 {
            return 0;
        }
        if !self.chars_per_frame.is_finite() || self.chars_per_frame <= 0.0 {
            return total;
        }
        let n = (elapsed * self.chars_per_frame).round();
        if n >= total as f64 { total } else { n as usize }
    }

    /// First frame at which the full text is visible.
    ///
    /// The reveal rounds, so the last grapheme lands once `elapsed * chars_per_frame` reaches
    /// `total - 0.5`.
    pub fn complete_frame(&self) -> i64 {
        if !self.chars_per_frame.is_finite() || self.chars_per_frame <= 0.0 {
            return self.message_start;
        }
        let total = self.total_chars();
        let needed = ((total as f64 - 0.5) / self.chars_per_frame).ceil().max(0.0);
        let mut frame = self.message_start.saturating_add(needed as i64);
        // Absorb float error in the threshold division.
        if frame > self.message_start && self.visible_chars((frame - 1) as f64) >= total {
            frame -= 1;
        } else if self.visible_chars(frame as f64) < total {
            frame = frame.saturating_add(1);
        }
        frame
    }

    /// Full state at `frame`.
    pub fn state(&self, frame: f64) -> ChatState {
        let phase = self.phase(frame);
        let total = self.total_chars();
        let visible = match phase {
            ChatPhase::Revealing => self.visible_chars(frame),
            _ => 0,
        };
        let text = grapheme_prefix(&self.text, visible).to_string();
        let dots = match phase {
            ChatPhase::Typing => typing_dots(frame),
            _ => [0.0; 3],
        };
        ChatState {
            phase,
            visible_chars: visible,
            total_chars: total,
            text,
            cursor_visible: phase == ChatPhase::Revealing && visible < total,
            dots,
        }
    }
}

/// Typing indicator dot levels: phase-shifted sines keyed on `frame + i * DOT_OFFSET_FRAMES`.
pub fn typing_dots(frame: f64) -> [f64; 3] {
    let wave = Wave::new(1.0, DOT_SPEED);
    [0.0, 1.0, 2.0].map(|i| wave.sample01(frame + i * DOT_OFFSET_FRAMES))
}

fn grapheme_prefix(text: &str, n: usize) -> &str {
    match text.grapheme_indices(true).nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Bubble colors and metrics.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChatStyle {
    /// Font size.
    pub font_px: f64,
    /// Line height as a multiple of `font_px`.
    pub line_height: f64,
    /// Max bubble width as a fraction of the area width.
    pub max_width_frac: f64,
    /// Inner padding.
    pub padding: f64,
    /// Vertical gap between bubbles.
    pub gap: f64,
    /// Bubble corner radius.
    pub radius: f64,
    /// User bubble fill.
    pub user_bubble: Rgba8,
    /// Assistant bubble fill.
    pub assistant_bubble: Rgba8,
    /// User text color.
    pub user_text: Rgba8,
    /// Assistant text color.
    pub assistant_text: Rgba8,
}

impl Default for ChatStyle {
    fn default() -> Self {
        Self {
            font_px: 15.0,
            line_height: 1.35,
            max_width_frac: 0.78,
            padding: 12.0,
            gap: 10.0,
            radius: 18.0,
            user_bubble: Rgba8::rgb(0xc9, 0xa2, 0x27),
            assistant_bubble: Rgba8::rgb(0x1f, 0x24, 0x33),
            user_text: Rgba8::rgb(0x0b, 0x0e, 0x16),
            assistant_text: Rgba8::rgb(0xf2, 0xf2, 0xf2),
        }
    }
}

/// A stack of chat bubbles inside `area`, auto-scrolled so the newest stays visible.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatThread {
    /// Messages in display order.
    pub messages: Vec<ChatMessage>,
    /// Viewport.
    pub area: Rect,
    /// Styling.
    #[serde(default)]
    pub style: ChatStyle,
}

/// Laid-out bubble.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BubbleLayout {
    /// Message index.
    pub index: usize,
    /// Bubble rectangle in area coordinates before scrolling.
    pub rect: Rect,
    /// Message state.
    pub state: ChatState,
    /// Pop-in progress in `[0, 1]`.
    pub appear: f64,
}

impl ChatThread {
    /// Bubbles shown at `frame` and the scroll offset applied to them.
    ///
    /// Heights come from an average-glyph-width estimate of the revealed text, so layout is a
    /// function of the frame alone.
    pub fn layout(&self, frame: f64) -> (Vec<BubbleLayout>, f64) {
        let s = &self.style;
        let max_w = (self.area.width() * s.max_width_frac).max(2.0 * s.padding + 1.0);
        let glyph_w = (s.font_px * 0.5).max(1.0);
        let per_line = ((max_w - 2.0 * s.padding) / glyph_w).floor().max(1.0);
        let line_h = s.font_px * s.line_height;

        let mut y = self.area.y0;
        let mut out = Vec::new();
        for (index, msg) in self.messages.iter().enumerate() {
            let state = msg.state(frame);
            let (w, h) = match state.phase {
                ChatPhase::Dormant => continue,
                ChatPhase::Typing => (64.0, 36.0),
                ChatPhase::Revealing => {
                    let n = state.visible_chars.max(1) as f64;
                    let lines = (n / per_line).ceil().max(1.0);
                    let w = if lines > 1.0 {
                        max_w
                    } else {
                        (n * glyph_w + 2.0 * s.padding).clamp(48.0, max_w)
                    };
                    (w, lines * line_h + 2.0 * s.padding)
                }
            };
            let x0 = match msg.role {
                ChatRole::User => self.area.x1 - w,
                ChatRole::Assistant => self.area.x0,
            };
            let appear = interpolate(
                frame,
                &[msg.typing_start as f64, msg.typing_start as f64 + BUBBLE_POP_FRAMES],
                &[0.0, 1.0],
                InterpolateOpts::eased(Ease::OutCubic),
            );
            out.push(BubbleLayout {
                index,
                rect: Rect::new(x0, y, x0 + w, y + h),
                state,
                appear,
            });
            y += h + s.gap;
        }
        let content_h = (y - s.gap - self.area.y0).max(0.0);
        let scroll = (content_h - self.area.height()).max(0.0);
        (out, scroll)
    }

    pub(crate) fn render(&self, frame: f64) -> Node {
        let s = &self.style;
        let (bubbles, scroll) = self.layout(frame);
        let children = bubbles
            .iter()
            .map(|b| {
                let msg = &self.messages[b.index];
                let (fill, ink) = match msg.role {
                    ChatRole::User => (s.user_bubble, s.user_text),
                    ChatRole::Assistant => (s.assistant_bubble, s.assistant_text),
                };
                let bg = Node::fill(
                    Shape::Rect {
                        rect: b.rect,
                        radius: s.radius,
                    },
                    Paint::Solid(fill),
                );
                let body = match b.state.phase {
                    ChatPhase::Typing => self.dots_node(b.rect, &b.state.dots, ink),
                    _ => {
                        let mut text = b.state.text.clone();
                        if b.state.cursor_visible {
                            text.push_str(CURSOR);
                        }
                        Node::text(TextNode {
                            text,
                            origin: Point::new(
                                b.rect.x0 + s.padding,
                                b.rect.y0 + s.padding + s.font_px,
                            ),
                            size_px: s.font_px,
                            weight: 400,
                            color: ink,
                            align: TextAlign::Left,
                            letter_spacing_px: 0.0,
                            max_width_px: Some(b.rect.width() - 2.0 * s.padding),
                        })
                    }
                };
                Node::group(vec![bg, body])
                    .transformed(Affine::translate((0.0, 8.0 * (1.0 - b.appear))))
                    .faded(b.appear)
                    .named(format!("bubble-{}", b.index))
            })
            .collect();

        let scrolled = Node::group(children).transformed(Affine::translate((0.0, -scroll)));
        Node::new(NodeKind::Group(GroupNode {
            children: vec![scrolled],
            perspective: None,
            clip: Some(RoundedRect {
                rect: self.area,
                radius: 0.0,
            }),
        }))
        .named("chat")
    }

    fn dots_node(&self, rect: Rect, dots: &[f64; 3], ink: Rgba8) -> Node {
        let c = rect.center();
        let children = dots
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                Node::fill(
                    Shape::Circle {
                        center: Point::new(c.x + (i as f64 - 1.0) * 12.0, c.y - 4.0 * d),
                        radius: 3.5,
                    },
                    Paint::Solid(ink),
                )
                .faded(0.4 + 0.6 * d)
            })
            .collect();
        Node::group(children).named("typing")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/chat.rs"]
mod tests;
