//! RATIO Motion is the frame-pure scene compositor behind the RATIO promotional videos.
//!
//! Every frame is a pure function of its index: ask a [`Composition`] for frame `N` and it
//! returns the full visual tree and active caption, with no state carried between frames.
//! Frames can therefore be rendered in any order or in parallel.
//!
//! - Build compositions with [`CompositionBuilder`] or look them up in [`registry`]
//! - Render single frames with [`Composition::render`] or ranges with [`render_frames`]
//! - Hand [`AudioManifest`] and [`FrameOutput`] to the external mixer and rasterizer
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod audio;
pub(crate) mod caption;
pub(crate) mod composition;
/// The built-in RATIO videos.
pub mod compositions;
pub(crate) mod eval;
pub(crate) mod primitives;
/// Built-in compositions by id.
pub mod registry;
pub(crate) mod render;
pub(crate) mod timeline;
pub(crate) mod visual;

pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Transform2D, Vec2,
};
pub use crate::foundation::error::{MotionError, MotionResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Extrapolate, InterpolateOpts, clamp01, ease, interpolate, progress,
};
pub use crate::animation::wave::{
    GOLDEN_ANGLE_DEG, GOLDEN_RATIO_FRACT, Wave, golden_angle_rad, golden_fract, hash01, mix64,
    wrap,
};
pub use crate::audio::manifest::{
    AudioCue, AudioManifest, AudioSegment, MIX_SAMPLE_RATE, build_audio_manifest,
    frame_to_sample,
};
pub use crate::caption::sync::{
    ActiveCaption, CAPTION_FADE_FRAMES, CaptionPhrase, CaptionWord, active_caption,
    caption_overlaps,
};
pub use crate::composition::dsl::{CompositionBuilder, SceneBuilder};
pub use crate::composition::model::{Composition, CompositionMeta, SceneDef};
pub use crate::composition::validate::{Issue, ValidationReport, check_composition};
pub use crate::eval::evaluator::{Evaluator, FrameOutput, SceneSample};
pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::primitives::charts::{BarChart, Dimension, RadarChart, ScoreRing};
pub use crate::primitives::chat::{
    BubbleLayout, ChatMessage, ChatPhase, ChatRole, ChatState, ChatStyle, ChatThread,
    DOT_OFFSET_FRAMES, DOT_SPEED, typing_dots,
};
pub use crate::primitives::overlay::{Backdrop, Grain, Vignette};
pub use crate::primitives::particles::{Particle, ParticleField};
pub use crate::primitives::phone::{
    Glare, KenBurns, PhoneEntry, PhoneMockup, PhoneState, PhoneSway,
};
pub use crate::primitives::text::{
    AccentLine, Counter, LineAnchor, Reveal, RevealTiming, TextReveal,
};
pub use crate::primitives::{Layer, LayerCtx};
pub use crate::render::pipeline::{RenderStats, RenderThreading, render_frames};
pub use crate::timeline::scene::{FADE_IN_FRAMES, RENDER_BUFFER_FRAMES, Scene, SceneState};
pub use crate::visual::color::Rgba8;
pub use crate::visual::node::{
    GradientStop, GroupNode, ImageNode, Node, NodeKind, Paint, Perspective, RoundedRect, Shape,
    ShapeNode, Stroke, TextAlign, TextNode,
};
