//! A simulated moot-court exchange with an AI bench.

use crate::{
    audio::manifest::AudioCue,
    composition::{dsl::SceneBuilder, model::Composition},
    compositions::{
        content_area, house_style,
        palette::{GOLD, SLATE, TRACK},
        title_block,
    },
    foundation::{
        core::{Canvas, Point},
        error::MotionResult,
    },
    primitives::{
        Layer,
        charts::ScoreRing,
        chat::{ChatMessage, ChatRole, ChatStyle, ChatThread},
        text::TextReveal,
    },
};

/// Registry id.
pub const ID: &str = "moot-court-session";

/// Total length: 20 s.
pub const DURATION: u64 = 600;

/// Scene-local timing of the exchange.
pub(crate) fn exchange() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            ChatRole::User,
            "May it please the court, I appear for the appellant, Ms Adams.",
            10,
            24,
            1.2,
        ),
        ChatMessage::new(
            ChatRole::Assistant,
            "Counsel, your skeleton leans heavily on Donoghue. Why should that duty reach a loss that is purely economic?",
            90,
            120,
            0.58,
        ),
        ChatMessage::new(
            ChatRole::User,
            "Because the respondent assumed responsibility, My Lady, exactly as in Hedley Byrne.",
            310,
            322,
            1.2,
        ),
    ]
}

/// Build the moot-court session.
pub fn build() -> MotionResult<Composition> {
    let cx = Canvas::STORY.w() / 2.0;

    let intro = SceneBuilder::new("intro", 0, 120)
        .crossfade(15)
        .layers(title_block(
            "Moot Court",
            Some("R v Adams, Court of Appeal"),
            360.0,
            6.0,
        ))
        .build()?;

    let session = SceneBuilder::new("session", 100, 400)
        .crossfade(20)
        .layer(Layer::Text(
            TextReveal::new("The Bench", Point::new(cx, 110.0), 14.0, SLATE, 0.0)
                .tracking(3.0),
        ))
        .layer(Layer::Chat(ChatThread {
            messages: exchange(),
            area: content_area(140.0, 760.0),
            style: ChatStyle::default(),
        }))
        .build()?;

    let verdict = SceneBuilder::new("verdict", 480, 120)
        .z(1)
        .layers(title_block("Submission scored", None, 200.0, 0.0))
        .layer(Layer::ScoreRing(ScoreRing {
            center: Point::new(cx, 420.0),
            radius: 90.0,
            thickness: 12.0,
            target: 78.0,
            start: 15.0,
            end: 75.0,
            track: TRACK,
            color: GOLD,
            label: "Oral argument".to_string(),
        }))
        .build()?;

    house_style(ID, DURATION)
        .scene(intro)
        .scene(session)
        .scene(verdict)
        .caption("Step up to the lectern.", 10, 100)
        .caption("The bench pushes back, just like the real thing.", 200, 420)
        .caption("Then you see exactly where you stand.", 490, 590)
        .audio(
            AudioCue::new("audio/music/courtroom-bed.mp3", 0, DURATION as i64)
                .volume(0.7)
                .fades(20, 40),
        )
        .audio(AudioCue::new("audio/sfx/gavel.mp3", 4, 24))
        .audio(AudioCue::new("audio/sfx/keys.mp3", 124, 50).volume(0.4))
        .audio(AudioCue::new("audio/sfx/keys.mp3", 220, 190).volume(0.4))
        .audio(AudioCue::new("audio/sfx/keys.mp3", 422, 60).volume(0.4))
        .audio(AudioCue::new("audio/sfx/chime.mp3", 495, 30).volume(0.8))
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/moot_court.rs"]
mod tests;
