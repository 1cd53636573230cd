//! Opaque RGB colour helpers.
//!
//! The canvas has no alpha channel, so every colour handled by the engine is an
//! opaque [`Color32`]. Colours travel through the UI as `#rrggbb` strings.

use egui::Color32;
use image::Rgb;

use crate::error::{PaintError, PaintResult};

/// Colour names accepted in configuration files.
const NAMED_COLORS: &[(&str, Color32)] = &[
    ("white", Color32::WHITE),
    ("black", Color32::BLACK),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("gray", Color32::from_rgb(128, 128, 128)),
];

/// Format a colour as `#rrggbb`. Alpha is dropped.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parse `#rrggbb`, `rrggbb`, `#rgb` or one of the named colours.
pub fn parse(text: &str) -> PaintResult<Color32> {
    let trimmed = text.trim();
    if let Some((_, color)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return Ok(*color);
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || PaintError::InvalidColor(text.to_owned());
    if !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            // #abc is shorthand for #aabbcc
            let short = |s: &str| channel(s).map(|v| v * 17);
            Ok(Color32::from_rgb(
                short(&hex[0..1])?,
                short(&hex[1..2])?,
                short(&hex[2..3])?,
            ))
        }
        _ => Err(invalid()),
    }
}

pub fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

pub fn from_rgb(pixel: Rgb<u8>) -> Color32 {
    Color32::from_rgb(pixel[0], pixel[1], pixel[2])
}

/// Linear blend of `fg` over `bg` with the given coverage in `0.0..=1.0`.
pub fn blend(bg: Rgb<u8>, fg: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let a = coverage.clamp(0.0, 1.0);
    let mix = |b: u8, f: u8| (b as f32 + (f as f32 - b as f32) * a).round() as u8;
    Rgb([mix(bg[0], fg[0]), mix(bg[1], fg[1]), mix(bg[2], fg[2])])
}
