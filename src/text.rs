//! Glyph layout and rasterization for text annotations.

use ab_glyph::{point, Font, FontArc, GlyphId, ScaleFont};
use egui::Pos2;

use crate::error::{PaintError, PaintResult};

/// Name of the monospace face bundled with egui's default fonts.
pub const DEFAULT_FONT_NAME: &str = "Hack";

/// Lays out and rasterizes single-style text at a fixed pixel size.
#[derive(Clone)]
pub struct TextRenderer {
    font: FontArc,
    size: f32,
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer")
            .field("size", &self.size)
            .finish()
    }
}

impl TextRenderer {
    pub fn new(font: FontArc, size: f32) -> Self {
        Self { font, size }
    }

    /// Load a face from egui's built-in font definitions.
    pub fn from_egui_font(name: &str, size: f32) -> PaintResult<Self> {
        let definitions = egui::FontDefinitions::default();
        let data = definitions
            .font_data
            .get(name)
            .ok_or_else(|| PaintError::FontUnavailable(format!("no bundled font named {name}")))?;
        let font = FontArc::try_from_vec(data.font.to_vec())
            .map_err(|err| PaintError::FontUnavailable(format!("{name}: {err}")))?;
        log::debug!("Loaded font {} at {}px", name, size);
        Ok(Self::new(font, size))
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Position every glyph of `text` with its top-left corner at `origin`.
    /// Lines are separated by `'\n'`.
    fn layout(&self, text: &str, origin: Pos2) -> Vec<(GlyphId, f32, f32)> {
        let scaled = self.font.as_scaled(self.size);
        let ascent = scaled.ascent();
        let line_height = scaled.height() + scaled.line_gap();

        let mut glyphs = Vec::new();
        for (line_idx, line) in text.split('\n').enumerate() {
            let baseline = origin.y + ascent + line_idx as f32 * line_height;
            let mut cursor_x = origin.x;
            let mut last_glyph: Option<GlyphId> = None;
            for ch in line.chars() {
                let glyph_id = self.font.glyph_id(ch);
                if let Some(prev) = last_glyph {
                    cursor_x += scaled.kern(prev, glyph_id);
                }
                glyphs.push((glyph_id, cursor_x, baseline));
                cursor_x += scaled.h_advance(glyph_id);
                last_glyph = Some(glyph_id);
            }
        }
        glyphs
    }

    /// Call `plot(x, y, coverage)` for every pixel touched by the rendered text.
    /// Coordinates may fall outside any particular raster; callers clip.
    pub fn rasterize(&self, text: &str, origin: Pos2, mut plot: impl FnMut(i64, i64, f32)) {
        for (glyph_id, x, y) in self.layout(text, origin) {
            let glyph = glyph_id.with_scale_and_position(self.size, point(x, y));
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                // Whitespace has no outline
                continue;
            };
            let bounds = outlined.px_bounds();
            let left = bounds.min.x as i64;
            let top = bounds.min.y as i64;
            outlined.draw(|gx, gy, coverage| {
                if coverage > 0.0 {
                    plot(left + gx as i64, top + gy as i64, coverage);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_font_loads() {
        let renderer = TextRenderer::from_egui_font(DEFAULT_FONT_NAME, 16.0).unwrap();
        assert_eq!(renderer.size(), 16.0);
    }

    #[test]
    fn test_unknown_font_is_an_error() {
        let result = TextRenderer::from_egui_font("No Such Face", 16.0);
        assert!(matches!(result, Err(PaintError::FontUnavailable(_))));
    }

    #[test]
    fn test_rasterize_stays_near_origin() {
        let renderer = TextRenderer::from_egui_font(DEFAULT_FONT_NAME, 16.0).unwrap();
        let mut touched = Vec::new();
        renderer.rasterize("Hi", Pos2::new(100.0, 50.0), |x, y, _| touched.push((x, y)));

        assert!(!touched.is_empty());
        for (x, y) in touched {
            assert!((98..140).contains(&x), "x out of range: {x}");
            assert!((48..72).contains(&y), "y out of range: {y}");
        }
    }

    #[test]
    fn test_whitespace_plots_nothing() {
        let renderer = TextRenderer::from_egui_font(DEFAULT_FONT_NAME, 16.0).unwrap();
        let mut count = 0;
        renderer.rasterize("   ", Pos2::ZERO, |_, _, _| count += 1);
        assert_eq!(count, 0);
    }
}
