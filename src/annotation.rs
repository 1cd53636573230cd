use egui::Color32;

use crate::raster::Raster;
use crate::text::TextRenderer;

/// A piece of text placed on the drawing.
///
/// Unlike strokes, annotations are remembered so they can be painted again
/// onto a fresh raster when the background changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnnotation {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Color32,
}

impl TextAnnotation {
    pub fn new(text: impl Into<String>, x: i32, y: i32, color: Color32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
        }
    }

    pub fn render(&self, raster: &mut Raster, renderer: &TextRenderer) {
        raster.draw_text(renderer, &self.text, self.x, self.y, self.color);
    }
}

/// Annotations in paint order (first placed is painted first).
#[derive(Debug, Clone, Default)]
pub struct AnnotationList {
    items: Vec<TextAnnotation>,
}

impl AnnotationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, annotation: TextAnnotation) {
        self.items.push(annotation);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextAnnotation> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Paint every annotation onto `raster` in insertion order
    pub fn replay(&self, raster: &mut Raster, renderer: &TextRenderer) {
        for annotation in &self.items {
            annotation.render(raster, renderer);
        }
    }
}
