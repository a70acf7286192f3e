#![forbid(unsafe_code)]

//! Global transport keys.
//!
//! Space toggles, the horizontal arrows navigate. Keys are swallowed only
//! when they actually drove the transport; everything else (editable
//! focus, held modifiers, no-op transport calls) stays with the host so
//! native behavior like page scroll is preserved.

use retrodesk_core::{InputFocus, KeyCode, KeyEvent};

use crate::coordinator::PlaybackCoordinator;
use crate::engine::EngineFactory;

/// Whether the host should suppress its native handling of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The key drove the transport; suppress native handling.
    Handled,
    /// Not a transport key, or the transport had nothing to do.
    Ignored,
}

/// Route one key event to the transport.
pub fn handle_key<F: EngineFactory>(
    coordinator: &mut PlaybackCoordinator<F>,
    key: KeyEvent,
    focus: InputFocus,
) -> KeyDisposition {
    if focus.is_editable() || key.has_modifiers() {
        return KeyDisposition::Ignored;
    }
    let acted = match key.code {
        KeyCode::Space => coordinator.toggle_play_pause(),
        KeyCode::ArrowRight => coordinator.next(),
        KeyCode::ArrowLeft => coordinator.previous(),
        _ => return KeyDisposition::Ignored,
    };
    if acted {
        KeyDisposition::Handled
    } else {
        KeyDisposition::Ignored
    }
}
