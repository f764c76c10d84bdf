use crate::foundation::{
    core::Fps,
    error::{MotionError, MotionResult},
};

/// Sample rate the external mixer works at.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

/// Declarative audio window, handed to the external mixer untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioCue {
    /// Symbolic asset reference, e.g. `audio/voiceover/scene-01.mp3`.
    pub asset: String,
    /// Absolute start frame.
    pub start_frame: i64,
    /// Length in frames.
    pub duration_in_frames: i64,
    /// Linear gain.
    #[serde(default = "unit_volume")]
    pub volume: f64,
    /// Fade-in length in frames.
    #[serde(default)]
    pub fade_in_frames: u64,
    /// Fade-out length in frames.
    #[serde(default)]
    pub fade_out_frames: u64,
}

fn unit_volume() -> f64 {
    1.0
}

impl AudioCue {
    /// Cue at full volume without fades.
    pub fn new(asset: impl Into<String>, start_frame: i64, duration_in_frames: i64) -> Self {
        Self {
            asset: asset.into(),
            start_frame,
            duration_in_frames,
            volume: 1.0,
            fade_in_frames: 0,
            fade_out_frames: 0,
        }
    }

    /// Builder: gain.
    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Builder: fade lengths in frames.
    pub fn fades(mut self, fade_in_frames: u64, fade_out_frames: u64) -> Self {
        self.fade_in_frames = fade_in_frames;
        self.fade_out_frames = fade_out_frames;
        self
    }

    /// First frame after the cue.
    pub fn end_frame(&self) -> i64 {
        self.start_frame.saturating_add(self.duration_in_frames)
    }
}

/// One cue placed on the timeline in sample space.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioSegment {
    /// Source cue index.
    pub cue: usize,
    /// Asset reference.
    pub asset: String,
    /// First timeline sample (inclusive).
    pub start_sample: u64,
    /// Last timeline sample (exclusive).
    pub end_sample: u64,
    /// Samples skipped at the head of the asset when the cue starts before frame 0.
    pub source_offset_samples: u64,
    /// Linear gain.
    pub volume: f64,
    /// Fade-in length in samples.
    pub fade_in_samples: u64,
    /// Fade-out length in samples.
    pub fade_out_samples: u64,
}

/// Mixer plan for the whole composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioManifest {
    /// Sample rate of every sample position.
    pub sample_rate: u32,
    /// Output channel count.
    pub channels: u16,
    /// Timeline length in samples.
    pub total_samples: u64,
    /// Scheduled cues in declaration order.
    pub segments: Vec<AudioSegment>,
}

/// Convert a frame count to samples, rounding to nearest, exact for rational frame rates.
pub fn frame_to_sample(frame_delta: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frame_delta) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num).max(1);
    ((num + (den / 2)) / den) as u64
}

/// Place every cue on a `[0, duration_in_frames)` timeline in sample space.
///
/// Cues are clipped to the timeline; cues entirely outside it or with a non-positive duration
/// are dropped. The asset bytes are never touched.
pub fn build_audio_manifest(
    cues: &[AudioCue],
    fps: Fps,
    duration_in_frames: u64,
) -> MotionResult<AudioManifest> {
    if fps.num == 0 || fps.den == 0 {
        return Err(MotionError::validation(
            "audio manifest fps must have non-zero numerator and denominator",
        ));
    }
    let sample_rate = MIX_SAMPLE_RATE;
    let total_samples = frame_to_sample(duration_in_frames, fps, sample_rate);
    let timeline_end = i64::try_from(duration_in_frames).unwrap_or(i64::MAX);

    let mut segments = Vec::with_capacity(cues.len());
    for (i, cue) in cues.iter().enumerate() {
        let start = cue.start_frame.max(0);
        let end = cue.end_frame().min(timeline_end);
        if cue.duration_in_frames <= 0 || end <= start {
            tracing::debug!(cue = i, asset = %cue.asset, "audio cue outside timeline, skipped");
            continue;
        }
        let head_skip = start.saturating_sub(cue.start_frame);
        let volume = if cue.volume.is_finite() {
            cue.volume.max(0.0)
        } else {
            0.0
        };
        segments.push(AudioSegment {
            cue: i,
            asset: cue.asset.clone(),
            start_sample: frame_to_sample(start as u64, fps, sample_rate),
            end_sample: frame_to_sample(end as u64, fps, sample_rate),
            source_offset_samples: frame_to_sample(head_skip as u64, fps, sample_rate),
            volume,
            fade_in_samples: frame_to_sample(cue.fade_in_frames, fps, sample_rate),
            fade_out_samples: frame_to_sample(cue.fade_out_frames, fps, sample_rate),
        });
    }

    Ok(AudioManifest {
        sample_rate,
        channels: 2,
        total_samples,
        segments,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/manifest.rs"]
mod tests;
