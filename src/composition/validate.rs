use std::{collections::HashSet, fmt};

use crate::{
    caption::sync::caption_overlaps,
    composition::model::Composition,
    foundation::error::{MotionError, MotionResult},
};

/// One finding, addressed by a JSON-path-like location (`$.scenes[2].crossfade`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Issue {
    /// Location of the offending value.
    pub path: String,
    /// What is wrong.
    pub message: String,
}

impl Issue {
    fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Result of [`check_composition`]: errors reject the composition, warnings are lints.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationReport {
    /// Structural problems.
    pub errors: Vec<Issue>,
    /// Degenerate but renderable data.
    pub warnings: Vec<Issue>,
}

impl ValidationReport {
    /// `true` when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Err` listing every error, one per line.
    pub fn into_result(self) -> MotionResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let lines: Vec<String> = self.errors.iter().map(Issue::to_string).collect();
        Err(MotionError::validation(format!(
            "composition validation failed:\n{}",
            lines.join("\n")
        )))
    }
}

/// Check a composition's structure and lint its time windows.
pub fn check_composition(comp: &Composition) -> ValidationReport {
    let mut r = ValidationReport::default();
    let meta = &comp.meta;

    if meta.id.trim().is_empty() {
        r.errors.push(Issue::at("$.meta.id", "must be non-empty"));
    }
    if meta.fps.num == 0 || meta.fps.den == 0 {
        r.errors.push(Issue::at(
            "$.meta.fps",
            "numerator and denominator must be > 0",
        ));
    }
    if meta.duration_in_frames == 0 {
        r.errors
            .push(Issue::at("$.meta.duration_in_frames", "must be > 0"));
    }
    if meta.canvas.width == 0 || meta.canvas.height == 0 {
        r.errors
            .push(Issue::at("$.meta.canvas", "width and height must be > 0"));
    }

    let duration = i64::try_from(meta.duration_in_frames).unwrap_or(i64::MAX);
    let mut ids = HashSet::<&str>::new();
    for (i, def) in comp.scenes.iter().enumerate() {
        let s = &def.scene;
        let path = format!("$.scenes[{i}]");
        if s.id.trim().is_empty() {
            r.errors
                .push(Issue::at(format!("{path}.id"), "must be non-empty"));
        } else if !ids.insert(s.id.as_str()) {
            r.errors.push(Issue::at(
                format!("{path}.id"),
                format!("duplicate scene id '{}'", s.id),
            ));
        }
        if s.duration <= 0 {
            r.warnings.push(Issue::at(
                format!("{path}.duration"),
                "non-positive duration; scene renders fully transparent",
            ));
        }
        if s.crossfade < 0 || s.crossfade > s.duration.max(0) {
            r.warnings.push(Issue::at(
                format!("{path}.crossfade"),
                "crossfade outside [0, duration]",
            ));
        }
        if s.start >= duration || s.end() <= 0 {
            r.warnings.push(Issue::at(
                path.clone(),
                "scene lies entirely outside the timeline",
            ));
        }
        if def.layers.is_empty() {
            r.warnings
                .push(Issue::at(format!("{path}.layers"), "scene has no layers"));
        }
    }

    for (i, c) in comp.captions.iter().enumerate() {
        if c.from >= c.to {
            r.warnings.push(Issue::at(
                format!("$.captions[{i}]"),
                "from >= to; highlight stays on the first word",
            ));
        }
        if c.text.split_whitespace().next().is_none() {
            r.warnings
                .push(Issue::at(format!("$.captions[{i}].text"), "caption has no words"));
        }
    }
    for (a, b) in caption_overlaps(&comp.captions) {
        r.warnings.push(Issue::at(
            format!("$.captions[{b}]"),
            format!("window overlaps captions[{a}]; captions[{a}] wins where both match"),
        ));
    }

    for (i, cue) in comp.audio.iter().enumerate() {
        let path = format!("$.audio[{i}]");
        if cue.asset.trim().is_empty() {
            r.errors
                .push(Issue::at(format!("{path}.asset"), "must be non-empty"));
        }
        if cue.duration_in_frames <= 0 {
            r.warnings.push(Issue::at(
                format!("{path}.duration_in_frames"),
                "non-positive duration; cue is dropped from the manifest",
            ));
        }
        if !cue.volume.is_finite() || cue.volume < 0.0 {
            r.warnings.push(Issue::at(
                format!("{path}.volume"),
                "volume must be finite and >= 0; treated as silent",
            ));
        }
    }

    r
}

#[cfg(test)]
#[path = "../../tests/unit/composition/validate.rs"]
mod tests;
