//! Brand colors shared by the built-in compositions.

use crate::visual::color::Rgba8;

pub(crate) const INK: Rgba8 = Rgba8::rgb(6, 8, 15);
pub(crate) const NAVY: Rgba8 = Rgba8::rgb(14, 22, 44);
pub(crate) const GOLD: Rgba8 = Rgba8::rgb(201, 169, 97);
pub(crate) const IVORY: Rgba8 = Rgba8::rgb(244, 239, 228);
pub(crate) const SLATE: Rgba8 = Rgba8::rgb(138, 148, 168);
pub(crate) const TRACK: Rgba8 = Rgba8::rgba(255, 255, 255, 28);
pub(crate) const DUST: Rgba8 = Rgba8::rgba(230, 214, 170, 200);
