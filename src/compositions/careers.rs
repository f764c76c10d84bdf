//! Careers portal on a phone, with a slow Ken Burns drift across the listings.

use crate::{
    audio::manifest::AudioCue,
    composition::{dsl::SceneBuilder, model::Composition},
    compositions::{
        house_style,
        palette::{IVORY, SLATE},
        title_block,
    },
    foundation::{
        core::{Canvas, Point, Vec2},
        error::MotionResult,
    },
    primitives::{
        Layer,
        phone::{KenBurns, PhoneMockup},
        text::{Counter, TextReveal},
    },
};

/// Registry id.
pub const ID: &str = "careers-portal";

/// Total length: 15 s.
pub const DURATION: u64 = 450;

/// The portal phone, in scene-local frames.
pub(crate) fn portal_phone() -> PhoneMockup {
    let mut phone = PhoneMockup::new(
        "screens/careers-portal-listings.png",
        Point::new(Canvas::STORY.w() / 2.0, 480.0),
    );
    phone.ken_burns = KenBurns {
        start: 30.0,
        end: 240.0,
        zoom_from: 1.0,
        zoom_to: 1.18,
        pan_from: Vec2::ZERO,
        pan_to: Vec2::new(0.0, -60.0),
    };
    phone
}

/// Build the careers portal walkthrough.
pub fn build() -> MotionResult<Composition> {
    let cx = Canvas::STORY.w() / 2.0;

    let hook = SceneBuilder::new("hook", 0, 120)
        .crossfade(15)
        .layers(title_block(
            "Your pupillage search, in one place.",
            Some("Chambers, firms and deadlines together."),
            360.0,
            6.0,
        ))
        .build()?;

    let portal = SceneBuilder::new("portal", 100, 260)
        .crossfade(20)
        .layer(Layer::Text(
            TextReveal::new("Careers portal", Point::new(cx, 120.0), 14.0, SLATE, 0.0)
                .tracking(3.0),
        ))
        .layer(Layer::Phone(portal_phone()))
        .build()?;

    let apply = SceneBuilder::new("apply", 340, 110)
        .z(1)
        .layer(Layer::Counter(
            Counter::new(240.0, Point::new(cx, 360.0), 56.0, IVORY)
                .window(12.0, 45.0)
                .affixes("", "+"),
        ))
        .layer(Layer::Text(
            TextReveal::new("chambers and firms", Point::new(cx, 400.0), 16.0, SLATE, 20.0)
                .weight(400),
        ))
        .layers(title_block("Apply in minutes.", None, 520.0, 40.0))
        .build()?;

    house_style(ID, DURATION)
        .scene(hook)
        .scene(portal)
        .scene(apply)
        .caption("Your pupillage search, in one place.", 10, 110)
        .caption("Every listing, every deadline, one feed.", 130, 340)
        .caption("Apply in minutes.", 360, 440)
        .audio(
            AudioCue::new("audio/music/careers-bed.mp3", 0, DURATION as i64)
                .volume(0.8)
                .fades(10, 40),
        )
        .audio(AudioCue::new("audio/sfx/whoosh.mp3", 100, 30).volume(0.6))
        .audio(AudioCue::new("audio/sfx/pop.mp3", 352, 20).volume(0.7))
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/careers.rs"]
mod tests;
