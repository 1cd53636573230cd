use std::collections::VecDeque;
use std::path::PathBuf;

use egui::Color32;

/// Severity of a message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the user, acknowledged with a single button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// The dialogs a command may need. Every prompt can be cancelled, which is
/// reported as `None`.
pub trait Prompter {
    fn choose_color(&mut self, initial: Color32) -> Option<Color32>;

    fn ask_string(&mut self, title: &str, label: &str) -> Option<String>;

    fn ask_integer(&mut self, title: &str, label: &str) -> Option<i64>;

    /// Ask where to save, offering files with the given extensions
    fn ask_save_path(&mut self, extensions: &[&str]) -> Option<PathBuf>;

    fn notify(&mut self, notice: Notice);
}

/// A [`Prompter`] whose answers are known up front.
///
/// The GUI collects answers in its own (non-blocking) windows and hands them
/// over when the user confirms. Unanswered prompts count as cancelled.
/// Notices are collected for the caller to display.
#[derive(Debug, Default)]
pub struct PromptAnswers {
    colors: VecDeque<Color32>,
    strings: VecDeque<String>,
    integers: VecDeque<i64>,
    save_path: Option<PathBuf>,
    notices: Vec<Notice>,
}

impl PromptAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.colors.push_back(color);
        self
    }

    pub fn with_string(mut self, text: impl Into<String>) -> Self {
        self.strings.push_back(text.into());
        self
    }

    pub fn with_integer(mut self, value: i64) -> Self {
        self.integers.push_back(value);
        self
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Prompter for PromptAnswers {
    fn choose_color(&mut self, _initial: Color32) -> Option<Color32> {
        self.colors.pop_front()
    }

    fn ask_string(&mut self, _title: &str, _label: &str) -> Option<String> {
        self.strings.pop_front()
    }

    fn ask_integer(&mut self, _title: &str, _label: &str) -> Option<i64> {
        self.integers.pop_front()
    }

    fn ask_save_path(&mut self, _extensions: &[&str]) -> Option<PathBuf> {
        self.save_path.take()
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
