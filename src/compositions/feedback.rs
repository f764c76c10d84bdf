//! Walkthrough of a scored submission: overall ring, radar, then per-dimension bars.

use crate::{
    audio::manifest::AudioCue,
    composition::{dsl::SceneBuilder, model::Composition},
    compositions::{
        content_area, house_style,
        palette::{GOLD, IVORY, SLATE, TRACK},
        title_block,
    },
    foundation::{
        core::{Canvas, Point},
        error::MotionResult,
    },
    primitives::{
        Layer,
        charts::{BarChart, Dimension, RadarChart, ScoreRing},
        text::Counter,
    },
};

/// Registry id.
pub const ID: &str = "feedback-breakdown";

/// Total length: 18 s.
pub const DURATION: u64 = 540;

/// The six marking dimensions and this submission's scores.
pub(crate) fn dimensions() -> Vec<Dimension> {
    vec![
        Dimension::new("Structure", 82.0),
        Dimension::new("Authority", 76.0),
        Dimension::new("Responsiveness", 88.0),
        Dimension::new("Clarity", 91.0),
        Dimension::new("Persuasion", 79.0),
        Dimension::new("Composure", 85.0),
    ]
}

/// Build the feedback breakdown.
pub fn build() -> MotionResult<Composition> {
    let cx = Canvas::STORY.w() / 2.0;

    let overall = SceneBuilder::new("overall", 0, 200)
        .crossfade(20)
        .layers(title_block("Your feedback", Some("Appellant, round two"), 120.0, 4.0))
        .layer(Layer::ScoreRing(ScoreRing {
            center: Point::new(cx, 400.0),
            radius: 100.0,
            thickness: 14.0,
            target: 84.0,
            start: 20.0,
            end: 80.0,
            track: TRACK,
            color: GOLD,
            label: "Overall".to_string(),
        }))
        .layer(Layer::Counter(
            Counter::new(15.0, Point::new(cx, 590.0), 22.0, IVORY)
                .window(70.0, 40.0)
                .affixes("Top ", "% of your cohort"),
        ))
        .build()?;

    let profile = SceneBuilder::new("profile", 180, 200)
        .crossfade(20)
        .layers(title_block("Your advocacy profile", None, 120.0, 0.0))
        .layer(Layer::Radar(RadarChart {
            center: Point::new(cx, 420.0),
            radius: 120.0,
            dimensions: dimensions(),
            start: 15.0,
            end: 75.0,
            stagger: 4.0,
            grid_rings: 4,
            grid: SLATE,
            color: GOLD,
        }))
        .build()?;

    let area = content_area(220.0, 560.0);
    let breakdown = SceneBuilder::new("breakdown", 360, 180)
        .layers(title_block("Where to focus next", None, 120.0, 0.0))
        .layer(Layer::Bars(BarChart {
            origin: Point::new(area.x0, area.y0),
            width: area.width(),
            bar_height: 8.0,
            row_height: 52.0,
            dimensions: dimensions(),
            start: 12.0,
            duration: 30.0,
            stagger: 6.0,
            track: TRACK,
            color: GOLD,
            label: IVORY,
        }))
        .build()?;

    house_style(ID, DURATION)
        .scene(overall)
        .scene(profile)
        .scene(breakdown)
        .caption("Every round is marked the moment you finish.", 15, 175)
        .caption("Six dimensions, the way assessors actually mark.", 195, 355)
        .caption("So you know exactly what to work on next.", 375, 530)
        .audio(
            AudioCue::new("audio/music/feedback-bed.mp3", 0, DURATION as i64)
                .volume(0.75)
                .fades(15, 45),
        )
        .audio(AudioCue::new("audio/sfx/tick-rise.mp3", 20, 60).volume(0.5))
        .audio(AudioCue::new("audio/sfx/tick-rise.mp3", 195, 60).volume(0.5))
        .audio(AudioCue::new("audio/sfx/tick-rise.mp3", 372, 60).volume(0.5))
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/feedback.rs"]
mod tests;
