use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
    },
    foundation::core::FrameIndex,
};

/// Length of the caption fade-in and fade-out ramps.
pub const CAPTION_FADE_FRAMES: f64 = 8.0;

/// Phrase shown on the closed frame window `[from, to]`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaptionPhrase {
    /// Phrase text; words are split on whitespace.
    pub text: String,
    /// First frame shown.
    pub from: i64,
    /// Last frame shown.
    pub to: i64,
}

impl CaptionPhrase {
    /// Phrase over `[from, to]`.
    pub fn new(text: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            text: text.into(),
            from,
            to,
        }
    }

    /// `true` when `from <= frame <= to`.
    pub fn contains(&self, frame: i64) -> bool {
        self.from <= frame && frame <= self.to
    }
}

/// One word of the active phrase.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CaptionWord {
    /// Word text.
    pub text: String,
    /// Already spoken.
    pub highlighted: bool,
}

/// The caption matched at a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ActiveCaption {
    /// Index into the phrase list.
    pub index: usize,
    /// Full phrase text.
    pub text: String,
    /// Words with their highlight state.
    pub words: Vec<CaptionWord>,
    /// Last highlighted word, in `[0, words.len() - 1]` (0 for an empty phrase).
    pub word_index: usize,
    /// Elapsed fraction of the window in `[0, 1]`.
    pub progress: f64,
    /// Product of the fade-in and fade-out ramps.
    pub opacity: f64,
}

/// The first phrase whose window contains `frame`, with words highlighted up to
/// `floor(progress * word_count)`.
///
/// Overlapping windows resolve to the earliest declared phrase.
pub fn active_caption(phrases: &[CaptionPhrase], frame: FrameIndex) -> Option<ActiveCaption> {
    let f = i64::try_from(frame.0).ok()?;
    let (index, phrase) = phrases.iter().enumerate().find(|(_, p)| p.contains(f))?;

    let span = i128::from(phrase.to) - i128::from(phrase.from);
    let progress = if span > 0 {
        (i128::from(f) - i128::from(phrase.from)) as f64 / span as f64
    } else {
        0.0
    };

    let words: Vec<&str> = phrase.text.split_whitespace().collect();
    let word_index = match words.len() {
        0 => 0,
        n => ((progress * n as f64).floor() as usize).min(n - 1),
    };

    let fade = InterpolateOpts::eased(Ease::OutCubic);
    let (from, to, x) = (phrase.from as f64, phrase.to as f64, f as f64);
    let fade_in = interpolate(x, &[from, from + CAPTION_FADE_FRAMES], &[0.0, 1.0], fade);
    let fade_out = interpolate(x, &[to - CAPTION_FADE_FRAMES, to], &[1.0, 0.0], fade);

    Some(ActiveCaption {
        index,
        text: phrase.text.clone(),
        words: words
            .iter()
            .enumerate()
            .map(|(i, w)| CaptionWord {
                text: (*w).to_string(),
                highlighted: i <= word_index,
            })
            .collect(),
        word_index,
        progress,
        opacity: fade_in * fade_out,
    })
}

/// Index pairs `(i, j)`, `i < j`, whose closed windows intersect.
pub fn caption_overlaps(phrases: &[CaptionPhrase]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (i, a) in phrases.iter().enumerate() {
        for (j, b) in phrases.iter().enumerate().skip(i + 1) {
            if a.from.max(b.from) <= a.to.min(b.to) {
                out.push((i, j));
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/caption/sync.rs"]
mod tests;
