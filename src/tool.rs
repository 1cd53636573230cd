use egui::Color32;

/// What a stroke paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Paint with a fixed colour
    Pen(Color32),
    /// Paint with whatever the background colour is when the stroke is drawn
    Eraser,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen(_) => "Pen",
            Self::Eraser => "Eraser",
        }
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self, Self::Eraser)
    }

    /// The colour this tool paints with on a canvas whose background is `background`
    pub fn resolve(&self, background: Color32) -> Color32 {
        match self {
            Self::Pen(color) => *color,
            Self::Eraser => background,
        }
    }
}

/// Current tool, brush size and the colour to go back to after erasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: Tool,
    previous_color: Option<Color32>,
    brush_size: u32,
}

impl ToolState {
    pub fn new(pen_color: Color32, brush_size: u32) -> Self {
        Self {
            tool: Tool::Pen(pen_color),
            previous_color: None,
            brush_size,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn previous_color(&self) -> Option<Color32> {
        self.previous_color
    }

    pub(crate) fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size;
    }

    /// Switch to a pen of `color`, leaving eraser mode if active
    pub fn set_pen_color(&mut self, color: Color32) {
        self.tool = Tool::Pen(color);
    }

    /// Remember the pen colour and start erasing. Already erasing: no-op,
    /// so the remembered colour is never overwritten.
    pub fn enter_eraser(&mut self) -> bool {
        match self.tool {
            Tool::Eraser => false,
            Tool::Pen(color) => {
                self.previous_color = Some(color);
                self.tool = Tool::Eraser;
                true
            }
        }
    }

    /// Go back to the remembered pen colour. No-op unless erasing with a
    /// remembered colour.
    pub fn enter_drawing(&mut self) -> bool {
        match (self.tool, self.previous_color) {
            (Tool::Eraser, Some(color)) => {
                self.tool = Tool::Pen(color);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eraser_round_trip_restores_color() {
        let color = Color32::from_rgb(12, 34, 56);
        let mut state = ToolState::new(color, 2);

        assert!(state.enter_eraser());
        assert_eq!(state.tool(), Tool::Eraser);
        assert!(state.enter_drawing());
        assert_eq!(state.tool(), Tool::Pen(color));
    }

    #[test]
    fn test_double_eraser_keeps_saved_color() {
        let color = Color32::from_rgb(200, 10, 10);
        let mut state = ToolState::new(color, 1);

        state.enter_eraser();
        assert!(!state.enter_eraser());
        assert_eq!(state.previous_color(), Some(color));

        state.enter_drawing();
        assert_eq!(state.tool(), Tool::Pen(color));
    }

    #[test]
    fn test_drawing_mode_without_saved_color_is_noop() {
        let mut state = ToolState::new(Color32::BLACK, 1);
        assert!(!state.enter_drawing());
        assert_eq!(state.tool(), Tool::Pen(Color32::BLACK));
    }

    #[test]
    fn test_eraser_resolves_to_background() {
        assert_eq!(Tool::Eraser.resolve(Color32::RED), Color32::RED);
        assert_eq!(Tool::Pen(Color32::BLUE).resolve(Color32::RED), Color32::BLUE);
    }
}
