use crate::engine::DrawingEngine;
use crate::export::SUPPORTED_EXTENSIONS;
use crate::prompt::{Notice, Prompter};

/// Actions the user can trigger from the toolbar or keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Blank the canvas
    Clear,
    /// Ask for a new pen colour
    ChoosePenColor,
    /// Export the canvas as PNG
    Save,
    ToggleEraser,
    ToggleDrawing,
    /// Ask for a background colour and repaint
    ChangeBackground,
    /// Ask for width and height and recreate the canvas
    ResizeCanvas,
    SetBrushSize(u32),
    /// Ask for text; the next click on the canvas places it
    AddText,
}

/// How a command invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed (or the command was a harmless no-op)
    Applied,
    /// The user cancelled a prompt; nothing changed
    Cancelled,
    /// Input was invalid or the operation failed; nothing changed and the
    /// user has been told why
    Rejected,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Clear => "Clear",
            Command::ChoosePenColor => "Pen color",
            Command::Save => "Save",
            Command::ToggleEraser => "Eraser",
            Command::ToggleDrawing => "Draw",
            Command::ChangeBackground => "Background",
            Command::ResizeCanvas => "Resize",
            Command::SetBrushSize(_) => "Brush size",
            Command::AddText => "Text",
        }
    }

    /// Execute the command, asking `prompter` for whatever input it needs
    pub fn execute(&self, engine: &mut DrawingEngine, prompter: &mut dyn Prompter) -> Outcome {
        log::debug!("Executing {:?}", self);
        match self {
            Command::Clear => {
                engine.clear();
                Outcome::Applied
            }

            Command::ChoosePenColor => match prompter.choose_color(engine.pen_color()) {
                Some(color) => {
                    engine.set_pen_color(color);
                    Outcome::Applied
                }
                None => Outcome::Cancelled,
            },

            Command::Save => {
                let Some(path) = prompter.ask_save_path(SUPPORTED_EXTENSIONS) else {
                    return Outcome::Cancelled;
                };
                match engine.export(&path) {
                    Ok(written) => {
                        prompter.notify(Notice::info(
                            "Saved",
                            format!("Image saved to {}", written.display()),
                        ));
                        Outcome::Applied
                    }
                    Err(err) => {
                        log::error!("{}", err);
                        prompter.notify(Notice::error("Save failed", err.to_string()));
                        Outcome::Rejected
                    }
                }
            }

            Command::ToggleEraser => {
                engine.enter_eraser();
                Outcome::Applied
            }

            Command::ToggleDrawing => {
                engine.enter_drawing();
                Outcome::Applied
            }

            Command::ChangeBackground => match prompter.choose_color(engine.background()) {
                Some(color) => {
                    engine.change_background(color);
                    Outcome::Applied
                }
                None => Outcome::Cancelled,
            },

            Command::ResizeCanvas => {
                let Some(width) = prompter.ask_integer("Canvas size", "Width:") else {
                    return Outcome::Cancelled;
                };
                let Some(height) = prompter.ask_integer("Canvas size", "Height:") else {
                    return Outcome::Cancelled;
                };
                match engine.resize(width, height) {
                    Ok(()) => Outcome::Applied,
                    Err(err) => {
                        log::warn!("{}", err);
                        prompter.notify(Notice::warning("Invalid size", err.to_string()));
                        Outcome::Rejected
                    }
                }
            }

            Command::SetBrushSize(size) => match engine.set_brush_size(*size) {
                Ok(()) => Outcome::Applied,
                Err(err) => {
                    log::warn!("{}", err);
                    prompter.notify(Notice::warning("Brush size", err.to_string()));
                    Outcome::Rejected
                }
            },

            Command::AddText => match prompter.ask_string("Text", "Enter text:") {
                Some(text) if engine.begin_text(&text) => Outcome::Applied,
                _ => Outcome::Cancelled,
            },
        }
    }
}
