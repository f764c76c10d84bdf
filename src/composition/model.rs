use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    audio::manifest::{AudioCue, AudioManifest, build_audio_manifest},
    caption::sync::CaptionPhrase,
    composition::validate::{ValidationReport, check_composition},
    eval::evaluator::{Evaluator, FrameOutput},
    foundation::{
        core::{Canvas, Fps, FrameIndex, FrameRange},
        error::{MotionError, MotionResult},
    },
    primitives::Layer,
    timeline::scene::Scene,
    visual::color::Rgba8,
};

/// What an external renderer needs to know to drive a composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositionMeta {
    /// Registry id.
    pub id: String,
    /// Frame rate.
    pub fps: Fps,
    /// Number of frames; valid queries are `[0, duration_in_frames)`.
    pub duration_in_frames: u64,
    /// Output size.
    pub canvas: Canvas,
}

impl CompositionMeta {
    /// 393x852 at 30 fps.
    pub fn story(id: impl Into<String>, duration_in_frames: u64) -> Self {
        Self {
            id: id.into(),
            fps: Fps::integer(30),
            duration_in_frames,
            canvas: Canvas::STORY,
        }
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_in_frames)
    }

    /// `[0, duration_in_frames)`.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_in_frames),
        }
    }
}

/// A scene plus the layers it draws, stacked by `z` then declaration order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    /// Timing.
    #[serde(flatten)]
    pub scene: Scene,
    /// Stacking order among scenes.
    #[serde(default)]
    pub z: i32,
    /// Layers in painter's order, evaluated at the scene-local frame.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// A complete, immutable video description.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    /// Registry metadata.
    pub meta: CompositionMeta,
    /// Clear color.
    #[serde(default = "default_background")]
    pub background: Rgba8,
    /// Layers below every scene, evaluated at the absolute frame.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub underlays: Vec<Layer>,
    /// Scenes.
    #[serde(default)]
    pub scenes: Vec<SceneDef>,
    /// Layers above every scene, evaluated at the absolute frame.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<Layer>,
    /// Caption phrases; first match wins.
    #[serde(default)]
    pub captions: Vec<CaptionPhrase>,
    /// Audio cue windows, passed through.
    #[serde(default)]
    pub audio: Vec<AudioCue>,
}

fn default_background() -> Rgba8 {
    Rgba8::BLACK
}

impl Composition {
    /// Parse a composition from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> MotionResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| MotionError::serde(format!("parse composition JSON: {e}")))
    }

    /// Parse a composition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MotionError::validation(format!("open composition JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> MotionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to `path`.
    pub fn write_path(&self, path: impl AsRef<Path>) -> MotionResult<()> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| {
            MotionError::validation(format!("create '{}': {e}", path.display()))
        })?;
        let mut w = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.flush()
            .map_err(|e| MotionError::validation(format!("write '{}': {e}", path.display())))
    }

    /// Structural checks plus lints, without logging.
    pub fn check(&self) -> ValidationReport {
        check_composition(self)
    }

    /// Reject structurally invalid compositions; log lints as warnings.
    ///
    /// Lints (malformed intervals, overlapping captions) never fail validation: such frames
    /// still render, just frozen or first-match.
    pub fn validate(&self) -> MotionResult<()> {
        let report = self.check();
        for w in &report.warnings {
            tracing::warn!(comp = %self.meta.id, path = %w.path, "{}", w.message);
        }
        report.into_result()
    }

    /// Resolve `frame`. Pure: same frame, same output, in any order or thread.
    pub fn render(&self, frame: FrameIndex) -> FrameOutput {
        Evaluator::render(self, frame)
    }

    /// Scene by id.
    pub fn scene(&self, id: &str) -> Option<&SceneDef> {
        self.scenes.iter().find(|s| s.scene.id == id)
    }

    /// Mixer plan for the full timeline.
    pub fn audio_manifest(&self) -> MotionResult<AudioManifest> {
        build_audio_manifest(&self.audio, self.meta.fps, self.meta.duration_in_frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
