#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Hosts translate platform pointer/keyboard input into these types and
//! feed them to the windowing and playback crates. Touch and mouse input
//! share one pointer event shape; the source is kept so hosts can decide
//! when to suppress native gestures.

use bitflags::bitflags;

use crate::geometry::Point;

/// Where a pointer event sits in a press/drag/release sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerPhase {
    /// Button press or touch start.
    Down,
    /// Movement while tracking.
    Move,
    /// Button release or touch end.
    Up,
    /// Tracking aborted by the platform (e.g. touch cancel).
    Cancel,
}

/// Physical origin of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub position: Point,
    pub phase: PointerPhase,
    pub source: PointerSource,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(position: Point, phase: PointerPhase, source: PointerSource) -> Self {
        Self {
            position,
            phase,
            source,
        }
    }

    /// Convenience constructor for mouse events.
    #[must_use]
    pub const fn mouse(position: Point, phase: PointerPhase) -> Self {
        Self::new(position, phase, PointerSource::Mouse)
    }

    /// Convenience constructor for touch events.
    #[must_use]
    pub const fn touch(position: Point, phase: PointerPhase) -> Self {
        Self::new(position, phase, PointerSource::Touch)
    }
}

/// Key codes the desktop reacts to.
///
/// Everything else arrives as [`KeyCode::Other`] and is passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyCode {
    Space,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const NONE = 0b0000;
        const CTRL = 0b0001;
        const ALT = 0b0010;
        const SHIFT = 0b0100;
        const SUPER = 0b1000;
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if any modifier is held.
    #[must_use]
    pub const fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }
}

/// Classification of the element holding keyboard focus.
///
/// Global shortcuts must never fire while the user is typing; hosts
/// report the focused element's kind alongside each key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputFocus {
    /// Focus is nowhere text-editable.
    #[default]
    None,
    TextInput,
    TextArea,
    ContentEditable,
}

impl InputFocus {
    /// True when keystrokes belong to a text editing surface.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        !matches!(self, InputFocus::None)
    }
}
