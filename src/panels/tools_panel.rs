use eframe::egui;

use crate::command::Command;
use crate::components::{ToolButton, color_swatch};
use crate::engine::DrawingEngine;

/// Toolbar along the top of the window. Returns the command the user picked, if any.
pub fn tools_panel(ctx: &egui::Context, engine: &DrawingEngine) -> Option<Command> {
    let mut picked = None;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for command in [
                Command::Clear,
                Command::ChoosePenColor,
                Command::Save,
            ] {
                if ui.button(command.label()).clicked() {
                    picked = Some(command);
                }
            }

            ui.separator();

            let erasing = engine.tool().is_eraser();
            if ToolButton::new("✏", "Draw", !erasing).show(ui).clicked() {
                picked = Some(Command::ToggleDrawing);
            }
            if ToolButton::new("⌫", "Eraser", erasing).show(ui).clicked() {
                picked = Some(Command::ToggleEraser);
            }

            ui.separator();

            for command in [Command::ChangeBackground, Command::ResizeCanvas, Command::AddText] {
                if ui.button(command.label()).clicked() {
                    picked = Some(command);
                }
            }

            ui.separator();

            let mut size = engine.brush_size();
            egui::ComboBox::from_id_salt("brush_size")
                .selected_text(format!("{} px", size))
                .width(70.0)
                .show_ui(ui, |ui| {
                    for &option in engine.brush_sizes() {
                        ui.selectable_value(&mut size, option, format!("{} px", option));
                    }
                });
            if size != engine.brush_size() {
                picked = Some(Command::SetBrushSize(size));
            }
        });

        ui.horizontal(|ui| {
            color_swatch(ui, engine.pen_color());
            ui.label(format!(
                "{} {}  |  {} px  |  {}x{}",
                engine.tool().name(),
                crate::color::to_hex(engine.pen_color()),
                engine.brush_size(),
                engine.width(),
                engine.height(),
            ));
            if let Some(text) = engine.state().pending_text() {
                ui.separator();
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    format!("Click on the canvas to place {:?} (Esc to cancel)", text),
                );
            }
        });
    });

    picked
}
