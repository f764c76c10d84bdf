use crate::{
    audio::manifest::AudioCue,
    caption::sync::CaptionPhrase,
    composition::model::{Composition, CompositionMeta, SceneDef},
    foundation::{
        core::{Canvas, Fps},
        error::{MotionError, MotionResult},
    },
    primitives::Layer,
    timeline::scene::Scene,
    visual::color::Rgba8,
};

/// Builder for [`Composition`].
pub struct CompositionBuilder {
    meta: CompositionMeta,
    background: Rgba8,
    underlays: Vec<Layer>,
    scenes: Vec<SceneDef>,
    overlays: Vec<Layer>,
    captions: Vec<CaptionPhrase>,
    audio: Vec<AudioCue>,
}

impl CompositionBuilder {
    /// Create a builder for a new composition.
    pub fn new(id: impl Into<String>, fps: Fps, canvas: Canvas, duration_in_frames: u64) -> Self {
        Self::from_meta(CompositionMeta {
            id: id.into(),
            fps,
            duration_in_frames,
            canvas,
        })
    }

    /// Builder for the 393x852, 30 fps story format.
    pub fn story(id: impl Into<String>, duration_in_frames: u64) -> Self {
        Self::from_meta(CompositionMeta::story(id, duration_in_frames))
    }

    fn from_meta(meta: CompositionMeta) -> Self {
        Self {
            meta,
            background: Rgba8::BLACK,
            underlays: Vec::new(),
            scenes: Vec::new(),
            overlays: Vec::new(),
            captions: Vec::new(),
            audio: Vec::new(),
        }
    }

    /// Set the clear color.
    pub fn background(mut self, color: Rgba8) -> Self {
        self.background = color;
        self
    }

    /// Append a layer drawn beneath every scene.
    pub fn underlay(mut self, layer: Layer) -> Self {
        self.underlays.push(layer);
        self
    }

    /// Append a layer drawn above every scene.
    pub fn overlay(mut self, layer: Layer) -> Self {
        self.overlays.push(layer);
        self
    }

    /// Append a scene.
    pub fn scene(mut self, scene: SceneDef) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Append a caption phrase over `[from, to]`.
    pub fn caption(mut self, text: impl Into<String>, from: i64, to: i64) -> Self {
        self.captions.push(CaptionPhrase::new(text, from, to));
        self
    }

    /// Append an audio cue.
    pub fn audio(mut self, cue: AudioCue) -> Self {
        self.audio.push(cue);
        self
    }

    /// Build and validate the final [`Composition`].
    pub fn build(self) -> MotionResult<Composition> {
        let comp = Composition {
            meta: self.meta,
            background: self.background,
            underlays: self.underlays,
            scenes: self.scenes,
            overlays: self.overlays,
            captions: self.captions,
            audio: self.audio,
        };
        comp.validate()?;
        Ok(comp)
    }
}

/// Builder for [`SceneDef`] values.
pub struct SceneBuilder {
    id: String,
    start: i64,
    duration: i64,
    crossfade: i64,
    z: i32,
    layers: Vec<Layer>,
}

impl SceneBuilder {
    /// Create a scene builder over `[start, start + duration)`.
    pub fn new(id: impl Into<String>, start: i64, duration: i64) -> Self {
        Self {
            id: id.into(),
            start,
            duration,
            crossfade: 0,
            z: 0,
            layers: Vec::new(),
        }
    }

    /// Set the trailing crossfade length.
    pub fn crossfade(mut self, frames: i64) -> Self {
        self.crossfade = frames;
        self
    }

    /// Set the stacking order.
    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Append a layer.
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Append several layers in painter's order.
    pub fn layers(mut self, layers: impl IntoIterator<Item = Layer>) -> Self {
        self.layers.extend(layers);
        self
    }

    /// Build a validated [`SceneDef`].
    pub fn build(self) -> MotionResult<SceneDef> {
        if self.id.trim().is_empty() {
            return Err(MotionError::validation("scene id must be non-empty"));
        }
        if self.duration <= 0 {
            return Err(MotionError::validation(format!(
                "scene '{}' duration must be > 0",
                self.id
            )));
        }
        if !(0..=self.duration).contains(&self.crossfade) {
            return Err(MotionError::validation(format!(
                "scene '{}' crossfade must lie in [0, duration]",
                self.id
            )));
        }
        Ok(SceneDef {
            scene: Scene::new(self.id, self.start, self.duration, self.crossfade),
            z: self.z,
            layers: self.layers,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
