use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use egui::Color32;

use crate::color;
use crate::error::{PaintError, PaintResult};

/// Environment variable naming a JSON config file to load at startup
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Startup configuration.
///
/// Only defaults for a fresh session live here; nothing the user changes while
/// drawing is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct SketchConfig {
    pub width: u32,
    pub height: u32,
    /// Default background colour, as a name or `#rrggbb`
    pub background: String,
    pub pen_color: String,
    pub brush_size: u32,
    /// Sizes offered by the brush size selector
    pub brush_sizes: Vec<u32>,
    /// Pixel height of annotation text
    pub text_size: f32,
    /// Largest canvas width or height; bounded by the GPU texture size
    pub max_side: u32,
    pub window_title: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            background: "white".to_owned(),
            pen_color: "black".to_owned(),
            brush_size: 1,
            brush_sizes: vec![1, 2, 5, 10],
            text_size: 16.0,
            max_side: 8192,
            window_title: "Sketchpad".to_owned(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> PaintResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> PaintResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| PaintError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, or defaults when unset
    pub fn from_env() -> PaintResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> PaintResult<()> {
        if self.max_side == 0 {
            return Err(PaintError::InvalidConfig("max_side must be positive".to_owned()));
        }
        let sides = 1..=self.max_side;
        if !sides.contains(&self.width) || !sides.contains(&self.height) {
            return Err(PaintError::InvalidDimensions {
                width: self.width as i64,
                height: self.height as i64,
                max_side: self.max_side,
            });
        }
        self.background_color()?;
        self.pen_color()?;
        if self.brush_sizes.is_empty() || self.brush_sizes.contains(&0) {
            return Err(PaintError::InvalidConfig(
                "brush_sizes must be a non-empty list of positive sizes".to_owned(),
            ));
        }
        if !self.brush_sizes.contains(&self.brush_size) {
            return Err(PaintError::UnsupportedBrushSize(self.brush_size));
        }
        if self.text_size.is_nan() || self.text_size <= 0.0 {
            return Err(PaintError::InvalidConfig(format!(
                "text_size must be positive, got {}",
                self.text_size
            )));
        }
        Ok(())
    }

    pub fn background_color(&self) -> PaintResult<Color32> {
        color::parse(&self.background)
    }

    pub fn pen_color(&self) -> PaintResult<Color32> {
        color::parse(&self.pen_color)
    }
}
