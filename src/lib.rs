#![warn(clippy::all, rust_2018_idioms)]

pub mod annotation;
pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod prompt;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod text;
pub mod tool;

pub use annotation::{AnnotationList, TextAnnotation};
pub use app::PaintApp;
pub use command::{Command, Outcome};
pub use config::SketchConfig;
pub use engine::{DrawingEngine, Segment};
pub use error::{PaintError, PaintResult};
pub use input::{InputEvent, InputLocation};
pub use prompt::{Notice, NoticeLevel, PromptAnswers, Prompter};
pub use raster::Raster;
pub use renderer::Renderer;
pub use state::EditorState;
pub use tool::{Tool, ToolState};
