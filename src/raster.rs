//! The single authoritative pixel buffer of the drawing.

use std::path::Path;

use egui::{Color32, ColorImage, Pos2};
use image::{ImageFormat, RgbImage};

use crate::color;
use crate::error::{PaintError, PaintResult};
use crate::geometry;
use crate::text::TextRenderer;

/// A mutable grid of RGB pixels.
///
/// Every mutation bumps `version`, which the renderer uses to decide when the
/// display texture has to be re-uploaded.
#[derive(Clone)]
pub struct Raster {
    pixels: RgbImage,
    version: u64,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .field("version", &self.version)
            .finish()
    }
}

impl Raster {
    /// Create a raster filled with `background`
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, color::to_rgb(background)),
            version: 0,
        }
    }

    /// Discard all content and start over at the given size and colour.
    /// The version keeps counting up so displays notice the change.
    pub fn reset(&mut self, width: u32, height: u32, background: Color32) {
        self.pixels = RgbImage::from_pixel(width, height, color::to_rgb(background));
        self.version += 1;
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }

    /// Read the pixel at `(x, y)`, or `None` outside the grid
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(color::from_rgb(*self.pixels.get_pixel(x as u32, y as u32)))
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Draw a straight, round-capped, anti-aliased line of the given width.
    ///
    /// Every pixel whose centre lies within `width / 2` of the segment is
    /// covered; a one pixel ramp outside that radius is blended.
    pub fn draw_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let radius = (width * 0.5).max(0.5);
        let bounds = geometry::segment_bounds(from, to, radius + 1.0);
        let Some((x0, y0, x1, y1)) = geometry::pixel_span(bounds, self.width(), self.height())
        else {
            return;
        };

        let fg = color::to_rgb(color);
        for y in y0..y1 {
            for x in x0..x1 {
                let centre = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = geometry::distance_to_segment(centre, from, to);
                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let px = self.pixels.get_pixel_mut(x, y);
                *px = color::blend(*px, fg, coverage);
            }
        }
        self.version += 1;
    }

    /// Render `text` with its top-left corner at `(x, y)`
    pub fn draw_text(
        &mut self,
        renderer: &TextRenderer,
        text: &str,
        x: i32,
        y: i32,
        color: Color32,
    ) {
        let fg = color::to_rgb(color);
        let (width, height) = (self.width() as i64, self.height() as i64);
        let pixels = &mut self.pixels;
        renderer.rasterize(text, Pos2::new(x as f32, y as f32), |px, py, coverage| {
            if px < 0 || py < 0 || px >= width || py >= height {
                return;
            }
            let pixel = pixels.get_pixel_mut(px as u32, py as u32);
            *pixel = color::blend(*pixel, fg, coverage);
        });
        self.version += 1;
    }

    /// Convert to an egui image for texture upload
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgb(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }

    /// Encode the pixels as PNG at `path`
    pub fn save_png(&self, path: &Path) -> PaintResult<()> {
        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| PaintError::Export {
                path: path.to_path_buf(),
                source,
            })
    }
}
