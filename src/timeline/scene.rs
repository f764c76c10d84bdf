use crate::{animation::interpolate::clamp01, foundation::core::FrameIndex};

/// Frames of slack on both edges of a scene during which it is still evaluated, so entrance
/// and exit motion is not clipped.
pub const RENDER_BUFFER_FRAMES: i64 = 10;

/// Length of every scene's linear fade-in.
pub const FADE_IN_FRAMES: i64 = 25;

/// One contiguous timeline segment, in frames.
///
/// Scenes are declared statically per composition and never mutated. Overlap between
/// consecutive scenes is allowed and expected inside the trailing `crossfade` of one scene and
/// the fade-in of the next; nothing enforces global non-overlap.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Stable scene identifier.
    pub id: String,
    /// Absolute start frame.
    pub start: i64,
    /// Active length in frames.
    pub duration: i64,
    /// Trailing fade-out length; 0 means a hard cut at `duration`.
    #[serde(default)]
    pub crossfade: i64,
}

impl Scene {
    /// Build a scene descriptor.
    pub fn new(id: impl Into<String>, start: i64, duration: i64, crossfade: i64) -> Self {
        Self {
            id: id.into(),
            start,
            duration,
            crossfade,
        }
    }

    /// First frame after the scene's active window.
    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.duration)
    }

    /// `frame - start`; negative before the scene begins.
    pub fn local_frame(&self, frame: FrameIndex) -> i64 {
        frame_i64(frame).saturating_sub(self.start)
    }

    /// `true` on `[start - 10, start + duration + 10]`.
    pub fn is_visible(&self, frame: FrameIndex) -> bool {
        let local = i128::from(frame_i64(frame)) - i128::from(self.start);
        let buffer = i128::from(RENDER_BUFFER_FRAMES);
        (-buffer..=i128::from(self.duration) + buffer).contains(&local)
    }

    /// Scene opacity at `frame`: product of a 25-frame fade-in ramp and the crossfade ramp.
    ///
    /// The product is exactly 0 outside the active window and is a single hump inside it,
    /// without branching on phase.
    pub fn fade(&self, frame: FrameIndex) -> f64 {
        let local = self.local_frame(frame) as f64;
        let fade_in = clamp01(local / FADE_IN_FRAMES as f64);
        let fade_out = if self.crossfade > 0 {
            clamp01((self.duration as f64 - local) / self.crossfade as f64)
        } else if local <= self.duration as f64 {
            1.0
        } else {
            0.0
        };
        fade_in * fade_out
    }

    /// Visibility, local frame and fade resolved together; `None` when not visible.
    pub fn state_at(&self, frame: FrameIndex) -> Option<SceneState> {
        if !self.is_visible(frame) {
            return None;
        }
        Some(SceneState {
            local_frame: self.local_frame(frame),
            opacity: self.fade(frame),
        })
    }
}

/// Per-frame resolution of a visible [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneState {
    /// Scene-local frame (may be negative inside the leading render buffer).
    pub local_frame: i64,
    /// Scene opacity in `[0, 1]`.
    pub opacity: f64,
}

fn frame_i64(frame: FrameIndex) -> i64 {
    i64::try_from(frame.0).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scene.rs"]
mod tests;
