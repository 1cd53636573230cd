use egui::{Context, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect};

use crate::engine::DrawingEngine;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas pixel coordinates (origin at the canvas top-left)
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Keyboard shortcuts the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    ChooseColor,
    CancelText,
}

pub const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
pub const CHOOSE_COLOR_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND, Key::C);

/// Canvas-level input events
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved while the primary button is held
    Drag { location: InputLocation },
    /// Primary button released
    Release { location: InputLocation },
    /// Primary button pressed on the canvas
    PrimaryPress { location: InputLocation },
    /// Secondary button pressed on the canvas
    SecondaryClick { location: InputLocation },
    Shortcut(Shortcut),
}

impl InputEvent {
    /// Helper to check if an input event occurred within the canvas
    pub fn is_in_canvas(&self) -> bool {
        match self {
            InputEvent::Drag { location }
            | InputEvent::Release { location }
            | InputEvent::PrimaryPress { location }
            | InputEvent::SecondaryClick { location } => location.is_in_canvas,
            InputEvent::Shortcut(_) => false,
        }
    }
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// The primary button went down on the canvas and has not been released
    primary_held_on_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            primary_held_on_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized or the canvas changes size)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Forget any gesture in progress
    pub fn reset(&mut self) {
        self.last_pointer_pos = None;
        self.primary_held_on_canvas = false;
    }

    /// Creates an InputLocation from a screen position
    pub fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Translate this frame's pointer state into events.
    ///
    /// `canvas_hovered` must be false while another window covers the canvas,
    /// so clicks on dialogs never reach the drawing.
    pub fn pointer_events(
        &mut self,
        pointer_pos: Option<Pos2>,
        primary_pressed: bool,
        primary_down: bool,
        primary_released: bool,
        secondary_pressed: bool,
        canvas_hovered: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(pos) = pointer_pos {
            let location = self.make_location(pos);

            if primary_pressed && canvas_hovered && location.is_in_canvas {
                self.primary_held_on_canvas = true;
                events.push(InputEvent::PrimaryPress { location });
            }

            if primary_down && self.primary_held_on_canvas && Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::Drag { location });
            }

            if secondary_pressed && canvas_hovered && location.is_in_canvas {
                events.push(InputEvent::SecondaryClick { location });
            }

            self.last_pointer_pos = Some(pos);
        }

        if primary_released && self.primary_held_on_canvas {
            self.primary_held_on_canvas = false;
            let pos = pointer_pos.or(self.last_pointer_pos).unwrap_or(self.canvas_rect.min);
            events.push(InputEvent::Release {
                location: self.make_location(pos),
            });
        }

        events
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let (pos, pressed, down, released, secondary) = ctx.input(|input| {
            (
                input.pointer.interact_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_down(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
                input.pointer.button_pressed(PointerButton::Secondary),
            )
        });
        let mut events =
            self.pointer_events(pos, pressed, down, released, secondary, canvas_hovered);

        if !ctx.wants_keyboard_input() {
            ctx.input_mut(|input| {
                if input.consume_shortcut(&SAVE_SHORTCUT) {
                    events.push(InputEvent::Shortcut(Shortcut::Save));
                }
                // Some backends turn Ctrl+C into a Copy event instead of a key press
                let copy_event = input.events.iter().any(|e| matches!(e, egui::Event::Copy));
                if input.consume_shortcut(&CHOOSE_COLOR_SHORTCUT) || copy_event {
                    events.push(InputEvent::Shortcut(Shortcut::ChooseColor));
                }
                if input.key_pressed(Key::Escape) {
                    events.push(InputEvent::Shortcut(Shortcut::CancelText));
                }
            });
        }

        events
    }
}

/// Feed a pointer event to the engine. Shortcuts need dialogs and are left
/// to the caller; returns `true` if the event was consumed here.
pub fn route_event(event: &InputEvent, engine: &mut DrawingEngine) -> bool {
    match event {
        InputEvent::Drag { location } => {
            engine.pointer_drag(location.position);
            true
        }
        InputEvent::Release { .. } => {
            engine.pointer_release();
            true
        }
        InputEvent::PrimaryPress { location } => {
            engine.primary_press(location.position);
            true
        }
        InputEvent::SecondaryClick { location } => {
            engine.secondary_click(location.position);
            true
        }
        InputEvent::Shortcut(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Id, RawInput, pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 100.0)))
    }

    /// Primary button state for one frame
    #[derive(Clone, Copy, Default)]
    struct Buttons {
        pressed: bool,
        down: bool,
        released: bool,
        secondary: bool,
    }

    const PRESS: Buttons = Buttons {
        pressed: true,
        down: true,
        released: false,
        secondary: false,
    };
    const HOLD: Buttons = Buttons {
        pressed: false,
        down: true,
        released: false,
        secondary: false,
    };
    const RELEASE: Buttons = Buttons {
        pressed: false,
        down: false,
        released: true,
        secondary: false,
    };
    const RIGHT_CLICK: Buttons = Buttons {
        pressed: false,
        down: false,
        released: false,
        secondary: true,
    };

    fn frame(handler: &mut InputHandler, pos: Pos2, b: Buttons, over: bool) -> Vec<InputEvent> {
        handler.pointer_events(Some(pos), b.pressed, b.down, b.released, b.secondary, over)
    }

    fn key(key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    /// Run one egui frame with `events` and collect what the handler emits.
    /// With `text_focused` a widget holds keyboard focus during the frame.
    fn shortcut_events(
        events: Vec<Event>,
        modifiers: Modifiers,
        text_focused: bool,
    ) -> Vec<InputEvent> {
        let ctx = egui::Context::default();
        let mut handler = handler();
        let mut emitted = Vec::new();
        let raw_input = RawInput {
            events,
            modifiers,
            ..Default::default()
        };
        let _ = ctx.run(raw_input, |ctx| {
            if text_focused {
                ctx.memory_mut(|memory| memory.request_focus(Id::new("text_field")));
            }
            emitted = handler.process_input(ctx, false);
        });
        emitted
    }

    #[test]
    fn test_locations_are_canvas_relative() {
        let handler = handler();
        let location = handler.make_location(pos2(110.0, 70.0));
        assert_eq!(location.position, pos2(10.0, 20.0));
        assert!(location.is_in_canvas);
        assert!(!handler.make_location(pos2(10.0, 10.0)).is_in_canvas);
    }

    #[test]
    fn test_press_drag_release_sequence() {
        let mut handler = handler();
        let events = frame(&mut handler, pos2(110.0, 60.0), PRESS, true);
        assert!(matches!(events[0], InputEvent::PrimaryPress { .. }));
        assert!(matches!(events[1], InputEvent::Drag { .. }));

        // Pointer did not move: no new drag
        let events = frame(&mut handler, pos2(110.0, 60.0), HOLD, true);
        assert!(events.is_empty());

        let events = frame(&mut handler, pos2(120.0, 65.0), HOLD, true);
        assert_eq!(
            events,
            vec![InputEvent::Drag {
                location: handler.make_location(pos2(120.0, 65.0))
            }]
        );

        let events = frame(&mut handler, pos2(120.0, 65.0), RELEASE, true);
        assert!(matches!(events[0], InputEvent::Release { .. }));
    }

    #[test]
    fn test_drag_started_outside_canvas_is_ignored() {
        let mut handler = handler();
        assert!(frame(&mut handler, pos2(10.0, 10.0), PRESS, false).is_empty());
        assert!(frame(&mut handler, pos2(150.0, 80.0), HOLD, true).is_empty());
        assert!(frame(&mut handler, pos2(150.0, 80.0), RELEASE, true).is_empty());
    }

    #[test]
    fn test_covered_canvas_ignores_clicks() {
        let mut handler = handler();
        let both = Buttons {
            secondary: true,
            ..PRESS
        };
        assert!(frame(&mut handler, pos2(150.0, 80.0), both, false).is_empty());
    }

    #[test]
    fn test_secondary_click_on_canvas() {
        let mut handler = handler();
        let events = frame(&mut handler, pos2(150.0, 80.0), RIGHT_CLICK, true);
        assert_eq!(events.len(), 1);
        assert!(events[0].is_in_canvas());
    }

    #[test]
    fn test_save_shortcut() {
        let events = shortcut_events(
            vec![key(Key::S, Modifiers::COMMAND)],
            Modifiers::COMMAND,
            false,
        );
        assert_eq!(events, vec![InputEvent::Shortcut(Shortcut::Save)]);
    }

    #[test]
    fn test_choose_color_shortcut() {
        let events = shortcut_events(
            vec![key(Key::C, Modifiers::COMMAND)],
            Modifiers::COMMAND,
            false,
        );
        assert_eq!(events, vec![InputEvent::Shortcut(Shortcut::ChooseColor)]);
    }

    #[test]
    fn test_copy_event_chooses_color() {
        let events = shortcut_events(vec![Event::Copy], Modifiers::COMMAND, false);
        assert_eq!(events, vec![InputEvent::Shortcut(Shortcut::ChooseColor)]);
    }

    #[test]
    fn test_escape_cancels_text() {
        let events = shortcut_events(
            vec![key(Key::Escape, Modifiers::NONE)],
            Modifiers::NONE,
            false,
        );
        assert_eq!(events, vec![InputEvent::Shortcut(Shortcut::CancelText)]);
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        let events = shortcut_events(
            vec![key(Key::S, Modifiers::NONE), key(Key::C, Modifiers::NONE)],
            Modifiers::NONE,
            false,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_shortcuts_ignored_while_typing() {
        let events = shortcut_events(
            vec![
                key(Key::S, Modifiers::COMMAND),
                key(Key::C, Modifiers::COMMAND),
                Event::Copy,
                key(Key::Escape, Modifiers::NONE),
            ],
            Modifiers::COMMAND,
            true,
        );
        assert!(events.is_empty());
    }
}
