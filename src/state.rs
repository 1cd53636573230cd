//! The pointer-handling state machine of the drawing engine.
//!
//! ```text
//!   ┌──────┐  drag   ┌──────────┐
//!   │ Idle ├────────►│ Stroking ├──┐ drag (draws a segment)
//!   └─▲──┬─┘         └────┬─────┘◄─┘
//!     │  │ add text       │ release
//!     │  ▼                ▼
//!     │ ┌─────────────────────────┐ primary press ┌─────────────────┐
//!     │ │ AwaitingTextPlacement   ├──────────────►│ GestureConsumed │
//!     │ └─────────────────────────┘               └───────┬─────────┘
//!     └───────────────────────────────────────────────────┘ release
//! ```

use egui::{Color32, Pos2};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    /// No pointer gesture in progress
    #[default]
    Idle,
    /// A stroke is being drawn; `last` is where the previous segment ended
    Stroking { last: Pos2 },
    /// Text has been entered and waits for a click to place it
    AwaitingTextPlacement { text: String, color: Color32 },
    /// The press that placed text is still held; drags are ignored until release
    GestureConsumed,
}

impl EditorState {
    /// The previous stroke point, if a stroke is in progress
    pub fn last_point(&self) -> Option<Pos2> {
        match self {
            Self::Stroking { last } => Some(*last),
            _ => None,
        }
    }

    pub fn is_awaiting_text(&self) -> bool {
        matches!(self, Self::AwaitingTextPlacement { .. })
    }

    pub fn pending_text(&self) -> Option<&str> {
        match self {
            Self::AwaitingTextPlacement { text, .. } => Some(text),
            _ => None,
        }
    }
}
