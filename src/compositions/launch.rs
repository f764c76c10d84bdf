//! Brand teaser: practice, feedback, careers, then the tagline.

use crate::{
    audio::manifest::AudioCue,
    composition::{dsl::SceneBuilder, model::Composition},
    compositions::{
        house_style,
        palette::{GOLD, IVORY, SLATE, TRACK},
        title_block,
    },
    foundation::{
        core::{Canvas, Point},
        error::MotionResult,
    },
    primitives::{
        Layer,
        charts::ScoreRing,
        phone::PhoneMockup,
        text::{AccentLine, Counter, TextReveal},
    },
};

/// Registry id.
pub const ID: &str = "ratio-launch";

/// Total length: 50 s.
pub const DURATION: u64 = 1500;

/// Build the launch teaser.
pub fn build() -> MotionResult<Composition> {
    let cx = Canvas::STORY.w() / 2.0;

    let cold_open = SceneBuilder::new("cold-open", 0, 200)
        .crossfade(20)
        .layers(title_block(
            "Every advocate starts somewhere.",
            Some("Most start without a courtroom to practise in."),
            360.0,
            8.0,
        ))
        .build()?;

    let practice = SceneBuilder::new("practice", 180, 300)
        .crossfade(20)
        .layers(title_block("Argue before an AI bench.", None, 120.0, 0.0))
        .layer(Layer::Phone(PhoneMockup::new(
            "screens/moot-court-session.png",
            Point::new(cx, 500.0),
        )))
        .build()?;

    let feedback = SceneBuilder::new("feedback", 460, 300)
        .crossfade(20)
        .z(1)
        .layers(title_block("Scored the moment you sit down.", None, 140.0, 0.0))
        .layer(Layer::ScoreRing(ScoreRing {
            center: Point::new(cx, 430.0),
            radius: 96.0,
            thickness: 12.0,
            target: 86.0,
            start: 30.0,
            end: 100.0,
            track: TRACK,
            color: GOLD,
            label: "Overall".to_string(),
        }))
        .layer(Layer::Text(
            TextReveal::new(
                "Structure. Authority. Composure.",
                Point::new(cx, 600.0),
                15.0,
                SLATE,
                90.0,
            )
            .weight(500),
        ))
        .build()?;

    let careers = SceneBuilder::new("careers", 740, 300)
        .crossfade(20)
        .layers(title_block("Then take it to chambers.", None, 120.0, 0.0))
        .layer(Layer::Phone(PhoneMockup::new(
            "screens/careers-portal.png",
            Point::new(cx, 500.0),
        )))
        .build()?;

    let reach = SceneBuilder::new("reach", 1020, 300)
        .crossfade(20)
        .layer(Layer::Counter(
            Counter::new(12_000.0, Point::new(cx, 330.0), 52.0, IVORY)
                .window(10.0, 60.0)
                .affixes("", "+"),
        ))
        .layer(Layer::Text(
            TextReveal::new("students practising", Point::new(cx, 370.0), 16.0, SLATE, 20.0)
                .weight(400),
        ))
        .layer(Layer::Counter(
            Counter::new(94.0, Point::new(cx, 500.0), 52.0, IVORY)
                .window(50.0, 60.0)
                .affixes("", "%"),
        ))
        .layer(Layer::Text(
            TextReveal::new(
                "felt more prepared for assessment",
                Point::new(cx, 540.0),
                16.0,
                SLATE,
                60.0,
            )
            .weight(400),
        ))
        .build()?;

    let brand = SceneBuilder::new("brand", 1300, 200)
        .z(2)
        .layer(Layer::Text(
            TextReveal::new("RATIO.", Point::new(cx, 400.0), 64.0, IVORY, 10.0)
                .weight(800)
                .tracking(6.0),
        ))
        .layer(Layer::AccentLine(AccentLine::centered(
            Point::new(cx, 430.0),
            120.0,
            GOLD,
            24.0,
        )))
        .build()?;

    house_style(ID, DURATION)
        .scene(cold_open)
        .scene(practice)
        .scene(feedback)
        .scene(careers)
        .scene(reach)
        .scene(brand)
        .caption("Every advocate starts somewhere.", 20, 170)
        .caption("Argue before a bench that never gets tired.", 200, 450)
        .caption("Feedback on every submission, in seconds.", 480, 730)
        .caption("Find the chambers that fit you.", 760, 1010)
        .caption("Built with students, for students.", 1040, 1290)
        .caption("RATIO. See how far you can go.", 1310, 1480)
        .audio(
            AudioCue::new("audio/music/launch-bed.mp3", 0, DURATION as i64)
                .volume(0.8)
                .fades(15, 45),
        )
        .audio(AudioCue::new("audio/sfx/whoosh.mp3", 180, 30).volume(0.6))
        .audio(AudioCue::new("audio/sfx/whoosh.mp3", 460, 30).volume(0.6))
        .audio(AudioCue::new("audio/sfx/whoosh.mp3", 740, 30).volume(0.6))
        .audio(AudioCue::new("audio/sfx/whoosh.mp3", 1020, 30).volume(0.6))
        .audio(AudioCue::new("audio/sfx/brand-hit.mp3", 1310, 60))
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/launch.rs"]
mod tests;
