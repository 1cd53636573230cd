//! The drawing engine: one raster, the tool state and the text annotations.
//!
//! All pointer input and commands end up here. The raster is the only thing
//! that is displayed and exported; nothing else keeps a separate picture of the
//! drawing.

use std::path::{Path, PathBuf};

use egui::{Color32, Pos2};

use crate::annotation::{AnnotationList, TextAnnotation};
use crate::config::SketchConfig;
use crate::error::{PaintError, PaintResult};
use crate::export;
use crate::raster::Raster;
use crate::state::EditorState;
use crate::text::{DEFAULT_FONT_NAME, TextRenderer};
use crate::tool::{Tool, ToolState};

/// A line segment that was baked into the raster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
    pub width: f32,
    pub color: Color32,
}

#[derive(Debug)]
pub struct DrawingEngine {
    raster: Raster,
    background: Color32,
    default_background: Color32,
    tools: ToolState,
    brush_sizes: Vec<u32>,
    max_side: u32,
    annotations: AnnotationList,
    state: EditorState,
    text: TextRenderer,
}

impl DrawingEngine {
    /// Create an engine from a validated config, using the bundled font for text
    pub fn new(config: &SketchConfig) -> PaintResult<Self> {
        let text = TextRenderer::from_egui_font(DEFAULT_FONT_NAME, config.text_size)?;
        Self::with_text_renderer(config, text)
    }

    pub fn with_text_renderer(config: &SketchConfig, text: TextRenderer) -> PaintResult<Self> {
        config.validate()?;
        let background = config.background_color()?;
        let pen_color = config.pen_color()?;

        log::info!(
            "Creating {}x{} canvas, background {}",
            config.width,
            config.height,
            crate::color::to_hex(background)
        );

        Ok(Self {
            raster: Raster::new(config.width, config.height, background),
            background,
            default_background: background,
            tools: ToolState::new(pen_color, config.brush_size),
            brush_sizes: config.brush_sizes.clone(),
            max_side: config.max_side,
            annotations: AnnotationList::new(),
            state: EditorState::Idle,
            text,
        })
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn tool(&self) -> Tool {
        self.tools.tool()
    }

    /// The colour strokes are painted with right now
    pub fn pen_color(&self) -> Color32 {
        self.tools.tool().resolve(self.background)
    }

    pub fn brush_size(&self) -> u32 {
        self.tools.brush_size()
    }

    pub fn brush_sizes(&self) -> &[u32] {
        &self.brush_sizes
    }

    /// Largest accepted canvas width or height
    pub fn max_side(&self) -> u32 {
        self.max_side
    }

    pub fn annotations(&self) -> &AnnotationList {
        &self.annotations
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    // --- pointer input ---

    /// Primary-button drag to `pos`.
    ///
    /// The first drag event of a stroke only records the point; each later
    /// one draws a segment from the previous point and returns it.
    pub fn pointer_drag(&mut self, pos: Pos2) -> Option<Segment> {
        match self.state {
            EditorState::Idle => {
                self.state = EditorState::Stroking { last: pos };
                None
            }
            EditorState::Stroking { last } => {
                let segment = Segment {
                    from: last,
                    to: pos,
                    width: self.brush_size() as f32,
                    color: self.pen_color(),
                };
                self.raster
                    .draw_line(segment.from, segment.to, segment.width, segment.color);
                self.state = EditorState::Stroking { last: pos };
                log::trace!("Segment {:?} -> {:?}", segment.from, segment.to);
                Some(segment)
            }
            EditorState::AwaitingTextPlacement { .. } | EditorState::GestureConsumed => None,
        }
    }

    /// Primary-button release: ends the current stroke
    pub fn pointer_release(&mut self) {
        match self.state {
            EditorState::Stroking { .. } | EditorState::GestureConsumed => {
                self.state = EditorState::Idle;
            }
            EditorState::Idle | EditorState::AwaitingTextPlacement { .. } => {}
        }
    }

    /// Primary-button press. Places pending text, if any, and returns it.
    pub fn primary_press(&mut self, pos: Pos2) -> Option<TextAnnotation> {
        let EditorState::AwaitingTextPlacement { text, color } = &self.state else {
            return None;
        };

        let annotation = TextAnnotation::new(
            text.clone(),
            pos.x.floor() as i32,
            pos.y.floor() as i32,
            *color,
        );
        self.state = EditorState::GestureConsumed;
        annotation.render(&mut self.raster, &self.text);
        log::info!(
            "Placed text {:?} at ({}, {})",
            annotation.text,
            annotation.x,
            annotation.y
        );
        self.annotations.push(annotation.clone());
        Some(annotation)
    }

    /// Secondary-button click: eyedropper
    pub fn secondary_click(&mut self, pos: Pos2) -> Option<Color32> {
        self.pick_color(pos)
    }

    /// Take the pen colour from the pixel under `pos`. Outside the canvas this
    /// does nothing.
    pub fn pick_color(&mut self, pos: Pos2) -> Option<Color32> {
        let (x, y) = (pos.x.floor() as i64, pos.y.floor() as i64);
        match self.raster.pixel(x, y) {
            Some(color) => {
                self.tools.set_pen_color(color);
                log::debug!("Picked {} at ({}, {})", crate::color::to_hex(color), x, y);
                Some(color)
            }
            None => {
                log::warn!("Color pick at ({}, {}) is outside the canvas", x, y);
                None
            }
        }
    }

    // --- tool state ---

    pub fn enter_eraser(&mut self) -> bool {
        let changed = self.tools.enter_eraser();
        if changed {
            log::debug!("Eraser mode");
        }
        changed
    }

    pub fn enter_drawing(&mut self) -> bool {
        let changed = self.tools.enter_drawing();
        if changed {
            log::debug!("Drawing mode, pen {}", crate::color::to_hex(self.pen_color()));
        }
        changed
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.tools.set_pen_color(color);
    }

    /// Brush sizes are restricted to the configured set
    pub fn set_brush_size(&mut self, size: u32) -> PaintResult<()> {
        if !self.brush_sizes.contains(&size) {
            return Err(PaintError::UnsupportedBrushSize(size));
        }
        self.tools.set_brush_size(size);
        Ok(())
    }

    // --- text ---

    /// Arm text placement: the next primary press puts `text` on the canvas
    /// in the current pen colour. Empty text is refused.
    pub fn begin_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.state = EditorState::AwaitingTextPlacement {
            text: text.to_owned(),
            color: self.pen_color(),
        };
        true
    }

    /// Drop pending text placement
    pub fn cancel_text(&mut self) -> bool {
        if self.state.is_awaiting_text() {
            self.state = EditorState::Idle;
            true
        } else {
            false
        }
    }

    // --- whole-canvas operations ---

    /// Repaint the canvas in `color` and replay every text annotation on top.
    ///
    /// Freehand strokes are not kept: only annotations are remembered.
    pub fn change_background(&mut self, color: Color32) {
        self.background = color;
        self.raster.reset(self.width(), self.height(), color);
        self.annotations.replay(&mut self.raster, &self.text);
        log::info!(
            "Background set to {}, replayed {} annotation(s)",
            crate::color::to_hex(color),
            self.annotations.len()
        );
    }

    /// Blank canvas in the default background; annotations are discarded
    pub fn clear(&mut self) {
        self.reset_canvas(self.width(), self.height());
        log::info!("Canvas cleared");
    }

    /// Replace the canvas with a blank one of the given size.
    /// Sides outside `1..=max_side` are rejected and nothing changes; larger
    /// canvases would not fit in a single display texture.
    pub fn resize(&mut self, width: i64, height: i64) -> PaintResult<()> {
        let max_side = self.max_side;
        let invalid = || PaintError::InvalidDimensions {
            width,
            height,
            max_side,
        };
        let side = |value: i64| {
            u32::try_from(value)
                .ok()
                .filter(|side| (1..=max_side).contains(side))
        };
        let (Some(w), Some(h)) = (side(width), side(height)) else {
            return Err(invalid());
        };

        self.reset_canvas(w, h);
        log::info!("Canvas resized to {}x{}", w, h);
        Ok(())
    }

    fn reset_canvas(&mut self, width: u32, height: u32) {
        self.background = self.default_background;
        self.raster.reset(width, height, self.default_background);
        self.annotations.clear();
        self.state = EditorState::Idle;
    }

    /// Save the raster as PNG; returns the path actually written
    pub fn export(&self, path: &Path) -> PaintResult<PathBuf> {
        export::export_png(&self.raster, path)
    }
}
