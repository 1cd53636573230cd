use std::collections::VecDeque;

use eframe::egui;
use egui::Color32;

use crate::command::{Command, Outcome};
use crate::config::SketchConfig;
use crate::engine::DrawingEngine;
use crate::error::PaintResult;
use crate::export::SUPPORTED_EXTENSIONS;
use crate::input::{InputEvent, InputHandler, Shortcut, route_event};
use crate::panels::{central_panel, tools_panel};
use crate::prompt::{Notice, NoticeLevel, PromptAnswers};
use crate::renderer::Renderer;

/// An open modal window collecting input for a command
#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    PenColor { color: Color32 },
    Background { color: Color32 },
    Text { text: String },
    Resize { width: i64, height: i64 },
}

impl Dialog {
    fn title(&self) -> &'static str {
        match self {
            Dialog::PenColor { .. } => "Pen color",
            Dialog::Background { .. } => "Background color",
            Dialog::Text { .. } => "Text",
            Dialog::Resize { .. } => "Canvas size",
        }
    }
}

enum DialogAction {
    Confirm,
    Cancel,
}

pub struct PaintApp {
    engine: DrawingEngine,
    renderer: Renderer,
    input: InputHandler,
    dialog: Option<Dialog>,
    notices: VecDeque<Notice>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &SketchConfig) -> PaintResult<Self> {
        let engine = DrawingEngine::new(config)?;
        Ok(Self {
            engine,
            renderer: Renderer::new(&cc.egui_ctx),
            input: InputHandler::new(egui::Rect::NOTHING),
            dialog: None,
            notices: VecDeque::new(),
        })
    }

    /// Start a command: commands that need input open a dialog first,
    /// the rest run straight away.
    fn request(&mut self, command: Command) {
        // Dialogs swallow pointer events, so never leave a stroke dangling
        self.input.reset();
        self.engine.pointer_release();

        match command {
            Command::ChoosePenColor => {
                self.dialog = Some(Dialog::PenColor { color: self.engine.pen_color() });
            }
            Command::ChangeBackground => {
                self.dialog = Some(Dialog::Background { color: self.engine.background() });
            }
            Command::AddText => {
                self.dialog = Some(Dialog::Text { text: String::new() });
            }
            Command::ResizeCanvas => {
                self.dialog = Some(Dialog::Resize {
                    width: self.engine.width() as i64,
                    height: self.engine.height() as i64,
                });
            }
            Command::Save => {
                // Native dialog; blocks until the user answers
                let mut answers = PromptAnswers::new();
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("PNG files", SUPPORTED_EXTENSIONS)
                    .save_file()
                {
                    answers = answers.with_save_path(path);
                }
                self.run(command, answers);
            }
            Command::Clear
            | Command::ToggleEraser
            | Command::ToggleDrawing
            | Command::SetBrushSize(_) => self.run(command, PromptAnswers::new()),
        }
    }

    fn run(&mut self, command: Command, mut answers: PromptAnswers) {
        let outcome = command.execute(&mut self.engine, &mut answers);
        if outcome == Outcome::Cancelled {
            log::debug!("{:?} cancelled", command);
        }
        self.notices.extend(answers.take_notices());
    }

    fn confirm_dialog(&mut self, dialog: Dialog) {
        let (command, answers) = match dialog {
            Dialog::PenColor { color } => (
                Command::ChoosePenColor,
                PromptAnswers::new().with_color(color),
            ),
            Dialog::Background { color } => (
                Command::ChangeBackground,
                PromptAnswers::new().with_color(color),
            ),
            Dialog::Text { text } => (Command::AddText, PromptAnswers::new().with_string(text)),
            Dialog::Resize { width, height } => (
                Command::ResizeCanvas,
                PromptAnswers::new().with_integer(width).with_integer(height),
            ),
        };
        self.run(command, answers);
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &mut self.dialog else {
            return;
        };

        let mut action = None;
        egui::Window::new(dialog.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                match dialog {
                    Dialog::PenColor { color } | Dialog::Background { color } => {
                        egui::color_picker::color_picker_color32(
                            ui,
                            color,
                            egui::color_picker::Alpha::Opaque,
                        );
                        ui.label(crate::color::to_hex(*color));
                    }
                    Dialog::Text { text } => {
                        ui.label("Enter text:");
                        let response = ui.text_edit_singleline(text);
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            action = Some(DialogAction::Confirm);
                        } else if !response.has_focus() {
                            response.request_focus();
                        }
                    }
                    Dialog::Resize { width, height } => {
                        egui::Grid::new("resize_grid").num_columns(2).show(ui, |ui| {
                            ui.label("Width:");
                            ui.add(egui::DragValue::new(width));
                            ui.end_row();
                            ui.label("Height:");
                            ui.add(egui::DragValue::new(height));
                            ui.end_row();
                        });
                    }
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = Some(DialogAction::Confirm);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(DialogAction::Cancel);
                    }
                });
            });

        match action {
            Some(DialogAction::Confirm) => {
                if let Some(dialog) = self.dialog.take() {
                    self.confirm_dialog(dialog);
                }
            }
            Some(DialogAction::Cancel) => {
                log::debug!("Dialog cancelled");
                self.dialog = None;
            }
            None => {}
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notices.front() else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let color = match notice.level {
                    NoticeLevel::Info => ui.visuals().text_color(),
                    NoticeLevel::Warning => ui.visuals().warn_fg_color,
                    NoticeLevel::Error => ui.visuals().error_fg_color,
                };
                ui.colored_label(color, notice.text.as_str());
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });

        if acknowledged {
            self.notices.pop_front();
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, canvas_hovered: bool) {
        let events = self.input.process_input(ctx, canvas_hovered);
        for event in events {
            if route_event(&event, &mut self.engine) {
                continue;
            }
            if let InputEvent::Shortcut(shortcut) = event {
                match shortcut {
                    Shortcut::Save => self.request(Command::Save),
                    Shortcut::ChooseColor => self.request(Command::ChoosePenColor),
                    Shortcut::CancelText => {
                        self.engine.cancel_text();
                    }
                }
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.dialog.is_some() || !self.notices.is_empty();

        let picked = tools_panel(ctx, &self.engine);
        let canvas_hovered = central_panel(ctx, &self.engine, &mut self.renderer, &mut self.input);

        if modal_open {
            self.show_dialog(ctx);
            self.show_notice(ctx);
        } else {
            if let Some(command) = picked {
                self.request(command);
            }
            self.handle_input(ctx, canvas_hovered);
        }
    }
}
