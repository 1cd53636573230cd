use eframe::egui::{self, Color32, Rect, TextureHandle, TextureOptions};

use crate::raster::Raster;

/// Shows the raster on screen.
///
/// The raster is the only picture of the drawing; the renderer keeps an egui
/// texture copy of it and re-uploads only when the raster version changes.
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_version: Option<u64>,
    ctx: egui::Context,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Renderer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            texture: None,
            uploaded_version: None,
            ctx: ctx.clone(),
        }
    }

    /// Returns true if the next `sync` will upload the raster
    pub fn needs_upload(&self, raster: &Raster) -> bool {
        self.texture.is_none() || self.uploaded_version != Some(raster.version())
    }

    /// Make the texture match the raster
    pub fn sync(&mut self, raster: &Raster) {
        if !self.needs_upload(raster) {
            return;
        }
        let image = raster.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                let texture = self.ctx.load_texture("canvas", image, TextureOptions::NEAREST);
                self.texture = Some(texture);
            }
        }
        self.uploaded_version = Some(raster.version());
        log::trace!("Uploaded raster version {}", raster.version());
    }

    /// Paint the raster at 1:1 into `rect`
    pub fn render(&mut self, painter: &egui::Painter, rect: Rect, raster: &Raster) {
        self.sync(raster);
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}
