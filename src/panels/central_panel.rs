use eframe::egui;

use crate::engine::DrawingEngine;
use crate::input::InputHandler;
use crate::renderer::Renderer;

/// Lays out the canvas at its pixel size and paints the raster.
/// Returns whether the canvas itself (not a window above it) is hovered.
pub fn central_panel(
    ctx: &egui::Context,
    engine: &DrawingEngine,
    renderer: &mut Renderer,
    input: &mut InputHandler,
) -> bool {
    egui::CentralPanel::default()
        .show(ctx, |ui| {
            egui::ScrollArea::both()
                .drag_to_scroll(false)
                .show(ui, |ui| {
                    let size = egui::vec2(engine.width() as f32, engine.height() as f32);
                    let (response, painter) =
                        ui.allocate_painter(size, egui::Sense::click_and_drag());
                    let rect = response.rect;

                    input.set_canvas_rect(rect);
                    renderer.render(&painter, rect, engine.raster());

                    let hovered = response.hovered();
                    if hovered {
                        let icon = if engine.state().is_awaiting_text() {
                            egui::CursorIcon::Text
                        } else {
                            egui::CursorIcon::Crosshair
                        };
                        ctx.set_cursor_icon(icon);
                    }
                    hovered
                })
                .inner
        })
        .inner
}
